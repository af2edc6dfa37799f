use yew::prelude::*;

use crate::content::{self, FishVariety};
use crate::hooks::visibility::{reveal_classes, use_reveal_on_scroll};

#[derive(Properties, PartialEq)]
struct VarietyCardProps {
    fish: &'static FishVariety,
    index: usize,
    visible: bool,
}

#[function_component(VarietyCard)]
fn variety_card(props: &VarietyCardProps) -> Html {
    let fish = props.fish;
    html! {
        <article
            class={reveal_classes("variety-card", props.visible)}
            style={format!("transition-delay: {}ms;", props.index * 30)}
        >
            <div class="variety-image">
                <img src={fish.image.clone()} alt={fish.alt.clone()} loading="lazy" />
            </div>
            <div class="variety-body">
                <h3>{&fish.name}</h3>
                <p class="variety-local">{&fish.local_name}</p>
                <p>{&fish.description}</p>
            </div>
        </article>
    }
}

#[function_component(FishVarietiesSection)]
pub fn fish_varieties_section() -> Html {
    let section_ref = use_node_ref();
    let is_visible = use_reveal_on_scroll(section_ref.clone());

    html! {
        <section id="varieties" ref={section_ref} class="varieties-section">
            <div class="section-container">
                <div class={reveal_classes("section-heading", is_visible)}>
                    <h2>{"Our Fish Varieties"}</h2>
                    <div class="section-rule"></div>
                    <p>{"Handpicked every morning at the landing centre. Cleaned, cut and packed to order."}</p>
                </div>
                <div class="variety-grid">
                    { for content::catalog().fish_varieties.iter().enumerate().map(|(index, fish)| html! {
                        <VarietyCard key={fish.id.clone()} {fish} {index} visible={is_visible} />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .varieties-section {
                        padding: 5rem 0;
                        background: #fff;
                    }

                    .variety-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }

                    .variety-card {
                        border-radius: 0.75rem;
                        overflow: hidden;
                        background: #fff;
                        box-shadow: 0 10px 25px rgba(0, 51, 102, 0.08);
                    }

                    .variety-image {
                        height: 12rem;
                        overflow: hidden;
                        background: #E8F4F8;
                    }

                    .variety-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }

                    .variety-card:hover .variety-image img {
                        transform: scale(1.08);
                    }

                    .variety-body {
                        padding: 1.25rem;
                    }

                    .variety-body h3 {
                        color: #003366;
                        font-size: 1.2rem;
                    }

                    .variety-local {
                        color: #FF6600;
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }

                    .variety-body p {
                        color: #4b5563;
                    }
                "#}
            </style>
        </section>
    }
}
