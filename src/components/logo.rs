use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Brand image that swaps itself for the brand name if the file fails to load.
#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let failed = use_state(|| false);

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    if *failed {
        html! {
            <span class={classes!("logo-fallback", props.class.clone())}>{"Koli Catch"}</span>
        }
    } else {
        html! {
            <img
                src={props.src.clone()}
                alt="Koli Catch Logo"
                class={classes!("logo-image", props.class.clone())}
                {onerror}
            />
        }
    }
}
