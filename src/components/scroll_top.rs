use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::SCROLL_TOP_THRESHOLD_PX;
use crate::utils::scroll::scroll_to_top;

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let (_, scroll_y) = use_window_scroll();

    if scroll_y <= SCROLL_TOP_THRESHOLD_PX {
        return html! {};
    }

    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <>
            <button class="scroll-top-button" aria-label="Scroll to top" {onclick}>{"↑"}</button>
            <style>
                {r#"
                    .scroll-top-button {
                        position: fixed;
                        bottom: 2rem;
                        right: 2rem;
                        z-index: 50;
                        width: 3.5rem;
                        height: 3.5rem;
                        border: none;
                        border-radius: 50%;
                        background: linear-gradient(90deg, #FF6600, #ff8533);
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                        box-shadow: 0 10px 25px rgba(255, 102, 0, 0.35);
                        transition: transform 0.3s ease;
                    }

                    .scroll-top-button:hover {
                        transform: translateY(-4px) scale(1.1);
                    }
                "#}
            </style>
        </>
    }
}
