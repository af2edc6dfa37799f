use yew::prelude::*;

use crate::content;
use crate::hooks::visibility::{reveal_classes, use_reveal_on_scroll};

const PROCESS_COPY: [&str; 4] = [
    "Our journey begins before sunrise, when our fishermen set sail into the Arabian Sea. With decades of experience and deep respect for the ocean, they ensure only the finest catch makes it to our facility.",
    "Once ashore, each fish undergoes rigorous quality checks and is processed in our state-of-the-art hygienic facility. We maintain the cold chain from catch to delivery, ensuring you receive seafood that's as fresh as it gets.",
    "Our expert team carefully inspects every fish for freshness, size, and quality. Only the best specimens are selected, then cleaned and prepared according to your preferences. Whether you need whole fish, fillets, or custom cuts, our skilled butchers handle each order with precision and care.",
    "The final step is our temperature-controlled packaging system. Each order is carefully packed with ice and insulated materials to maintain optimal freshness during transit. From the moment we receive your order to when it arrives at your doorstep, we ensure the cold chain is never broken.",
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let section_ref = use_node_ref();
    let is_visible = use_reveal_on_scroll(section_ref.clone());
    let catalog = content::catalog();

    html! {
        <section id="about" ref={section_ref} class="about-section">
            <div class="section-container">
                <div class={reveal_classes("section-heading", is_visible)}>
                    <h2>{"Our Story"}</h2>
                    <div class="section-rule"></div>
                    <p>
                        {"For generations, the Koli community has been the heartbeat of Mumbai's fishing industry. At Koli Catch, we honor this rich heritage by combining traditional fishing wisdom with modern quality standards. Every fish we deliver carries the legacy of our ancestors and the promise of unmatched freshness."}
                    </p>
                </div>

                <div class="feature-grid">
                    { for catalog.about_features.iter().enumerate().map(|(index, feature)| html! {
                        <div
                            class={reveal_classes("feature-card", is_visible)}
                            style={format!("transition-delay: {}ms;", index * 5)}
                        >
                            <div class="feature-icon">{feature.icon.glyph()}</div>
                            <h3>{&feature.title}</h3>
                            <p>{&feature.description}</p>
                        </div>
                    }) }
                </div>

                <div class={reveal_classes("ocean-to-table", is_visible)}>
                    <div class="process-gallery">
                        { for catalog.ocean_to_table.iter().enumerate().map(|(index, item)| html! {
                            <figure
                                key={item.id.to_string()}
                                class="process-tile"
                                style={format!("transition-delay: {}ms;", index * 50)}
                            >
                                <img src={item.image.clone()} alt={item.alt.clone()} loading="lazy" />
                                <figcaption>{&item.caption}</figcaption>
                            </figure>
                        }) }
                    </div>
                    <div class="process-copy">
                        <h3>{"From Ocean to Your Table"}</h3>
                        { for PROCESS_COPY.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .about-section {
                        padding: 5rem 0;
                        background: linear-gradient(180deg, #fff, #E8F4F8);
                    }

                    .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }

                    .feature-card {
                        background: #fff;
                        border-radius: 0.75rem;
                        padding: 2rem;
                        text-align: center;
                        box-shadow: 0 10px 25px rgba(0, 51, 102, 0.08);
                    }

                    .feature-icon {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1.5rem;
                        border-radius: 50%;
                        background: rgba(255, 102, 0, 0.1);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.75rem;
                    }

                    .feature-card h3 {
                        color: #003366;
                        font-size: 1.25rem;
                        margin-bottom: 0.75rem;
                    }

                    .feature-card p {
                        color: #4b5563;
                    }

                    .ocean-to-table {
                        margin-top: 4rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: start;
                    }

                    .process-gallery {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }

                    .process-tile {
                        position: relative;
                        height: 14rem;
                        margin: 0;
                        overflow: hidden;
                        border-radius: 0.75rem;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                    }

                    .process-tile img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s ease;
                    }

                    .process-tile:hover img {
                        transform: scale(1.1);
                    }

                    .process-tile figcaption {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 0.75rem;
                        color: #fff;
                        background: linear-gradient(0deg, rgba(0, 51, 102, 0.7), transparent);
                    }

                    .process-copy h3 {
                        color: #003366;
                        font-size: 1.875rem;
                        margin-bottom: 1.5rem;
                    }

                    .process-copy p {
                        color: #374151;
                        line-height: 1.7;
                        margin-bottom: 1rem;
                    }

                    @media (max-width: 1024px) {
                        .feature-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (max-width: 768px) {
                        .feature-grid,
                        .ocean-to-table {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
