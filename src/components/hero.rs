use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::section_scroll::use_section_scroll;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let scroll_to = use_section_scroll();

    let cta = |section: &'static str| {
        let scroll_to = scroll_to.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to.emit(section);
        })
    };

    html! {
        <section id="home" class="hero-section">
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <p class="hero-eyebrow">{"Fresh from the Arabian Sea"}</p>
                <h1>
                    {"Mumbai's Finest Catch, "}
                    <span class="accent">{"Delivered Fresh"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Traditional Koli fishing heritage meets modern cold-chain delivery. Same-day catch, cleaned and cut the way you like it."}
                </p>
                <div class="hero-actions">
                    <button class="hero-cta primary" onclick={cta("varieties")}>{"Explore Our Fish"}</button>
                    <button class="hero-cta secondary" onclick={cta("contact")}>{"Get in Touch"}</button>
                </div>
            </div>
            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 80px 1.5rem 0;
                        background: url('/images/hero/hero-boats.jpeg') center / cover no-repeat, #003366;
                        color: #fff;
                        text-align: center;
                    }

                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(180deg, rgba(0, 51, 102, 0.75), rgba(0, 51, 102, 0.45));
                    }

                    .hero-content {
                        position: relative;
                        max-width: 48rem;
                    }

                    .hero-eyebrow {
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: #FFB380;
                        margin-bottom: 1rem;
                    }

                    .hero-section h1 {
                        font-size: clamp(2.5rem, 6vw, 4rem);
                        font-weight: 800;
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                    }

                    .hero-section .accent {
                        color: #FF6600;
                    }

                    .hero-subtitle {
                        font-size: 1.2rem;
                        color: rgba(255, 255, 255, 0.9);
                        margin-bottom: 2.5rem;
                    }

                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                    }

                    .hero-cta {
                        padding: 0.9rem 2rem;
                        border-radius: 999px;
                        font-size: 1.05rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.2s ease;
                    }

                    .hero-cta:hover {
                        transform: translateY(-2px);
                    }

                    .hero-cta.primary {
                        background: #FF6600;
                        border: 2px solid #FF6600;
                        color: #fff;
                    }

                    .hero-cta.secondary {
                        background: transparent;
                        border: 2px solid #fff;
                        color: #fff;
                    }
                "#}
            </style>
        </section>
    }
}
