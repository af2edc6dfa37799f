use yew::prelude::*;

use crate::content;
use crate::hooks::visibility::{reveal_classes, use_reveal_on_scroll};

#[function_component(BusinessModelSection)]
pub fn business_model_section() -> Html {
    let section_ref = use_node_ref();
    let is_visible = use_reveal_on_scroll(section_ref.clone());
    let catalog = content::catalog();

    html! {
        <section id="business" ref={section_ref} class="business-section">
            <div class="section-container">
                <div class={reveal_classes("section-heading", is_visible)}>
                    <h2>{"How We Serve You"}</h2>
                    <div class="section-rule"></div>
                    <p>{"One catch, two ways to order: fresh to your home, or in bulk for your kitchen."}</p>
                </div>

                <div class="business-layout">
                    <div class="pillar-list">
                        { for catalog.business_pillars.iter().enumerate().map(|(index, pillar)| html! {
                            <div
                                class={reveal_classes("pillar", is_visible)}
                                style={format!("transition-delay: {}ms;", index * 40)}
                            >
                                <span class="pillar-icon">{pillar.icon.glyph()}</span>
                                <div>
                                    <h3>{&pillar.title}</h3>
                                    <p>{&pillar.description}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class={reveal_classes("business-gallery", is_visible)}>
                        { for catalog.business_images.iter().map(|item| html! {
                            <figure key={item.id.to_string()}>
                                <img src={item.image.clone()} alt={item.alt.clone()} loading="lazy" />
                                <figcaption>{&item.caption}</figcaption>
                            </figure>
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .business-section {
                        padding: 5rem 0;
                        background: #E8F4F8;
                    }

                    .business-layout {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }

                    .pillar {
                        display: flex;
                        gap: 1.25rem;
                        padding: 1.5rem;
                        margin-bottom: 1rem;
                        border-radius: 0.75rem;
                        background: #fff;
                        box-shadow: 0 6px 18px rgba(0, 51, 102, 0.08);
                    }

                    .pillar-icon {
                        font-size: 2rem;
                    }

                    .pillar h3 {
                        color: #003366;
                        margin-bottom: 0.35rem;
                    }

                    .pillar p {
                        color: #4b5563;
                    }

                    .business-gallery {
                        display: grid;
                        gap: 1rem;
                    }

                    .business-gallery figure {
                        margin: 0;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        position: relative;
                    }

                    .business-gallery img {
                        width: 100%;
                        height: 14rem;
                        object-fit: cover;
                    }

                    .business-gallery figcaption {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        padding: 0.75rem;
                        color: #fff;
                        background: linear-gradient(0deg, rgba(0, 51, 102, 0.7), transparent);
                    }

                    @media (max-width: 768px) {
                        .business-layout {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
