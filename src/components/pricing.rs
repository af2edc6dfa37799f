use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content;
use crate::hooks::section_scroll::use_section_scroll;
use crate::hooks::visibility::{reveal_classes, use_reveal_on_scroll};

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    let section_ref = use_node_ref();
    let is_visible = use_reveal_on_scroll(section_ref.clone());
    let scroll_to = use_section_scroll();

    let order = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to.emit("contact");
    });

    html! {
        <section id="pricing" ref={section_ref} class="pricing-section">
            <div class="section-container">
                <div class={reveal_classes("section-heading", is_visible)}>
                    <h2>{"Simple, Honest Pricing"}</h2>
                    <div class="section-rule"></div>
                    <p>{"Daily market rates, no hidden charges. Final billing is based on the actual delivered weight."}</p>
                </div>
                <div class="pricing-grid">
                    { for content::catalog().pricing_plans.iter().enumerate().map(|(index, plan)| html! {
                        <div
                            key={plan.name.clone()}
                            class={classes!(reveal_classes("pricing-card", is_visible), plan.highlighted.then_some("highlighted"))}
                            style={format!("transition-delay: {}ms;", index * 40)}
                        >
                            if plan.highlighted {
                                <span class="pricing-badge">{"Most Popular"}</span>
                            }
                            <h3>{&plan.name}</h3>
                            <div class="price">
                                <span class="amount">{&plan.price}</span>
                                <span class="period">{format!(" / {}", plan.unit)}</span>
                            </div>
                            <ul>
                                { for plan.features.iter().map(|feature| html! { <li>{feature}</li> }) }
                            </ul>
                            <button class="pricing-cta" onclick={order.clone()}>{"Order Now"}</button>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .pricing-section {
                        padding: 5rem 0;
                        background: #fff;
                    }

                    .pricing-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        align-items: stretch;
                    }

                    .pricing-card {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        padding: 2rem;
                        border: 2px solid #E8F4F8;
                        border-radius: 1rem;
                        background: #fff;
                    }

                    .pricing-card.highlighted {
                        border-color: #FF6600;
                        box-shadow: 0 20px 40px rgba(255, 102, 0, 0.15);
                    }

                    .pricing-badge {
                        position: absolute;
                        top: -0.9rem;
                        left: 50%;
                        transform: translateX(-50%);
                        padding: 0.25rem 1rem;
                        border-radius: 999px;
                        background: #FF6600;
                        color: #fff;
                        font-size: 0.8rem;
                        font-weight: 700;
                    }

                    .pricing-card h3 {
                        color: #003366;
                        font-size: 1.4rem;
                        margin-bottom: 1rem;
                    }

                    .pricing-card .amount {
                        color: #FF6600;
                        font-size: 2rem;
                        font-weight: 800;
                    }

                    .pricing-card .period {
                        color: #6b7280;
                    }

                    .pricing-card ul {
                        flex: 1;
                        margin: 1.5rem 0;
                        padding-left: 1.2rem;
                        color: #374151;
                    }

                    .pricing-card li {
                        margin-bottom: 0.5rem;
                    }

                    .pricing-cta {
                        padding: 0.8rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: #003366;
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                    }

                    .pricing-card.highlighted .pricing-cta {
                        background: #FF6600;
                    }

                    @media (max-width: 900px) {
                        .pricing-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
