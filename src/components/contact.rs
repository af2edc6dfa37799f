use yew::prelude::*;

use crate::content;
use crate::hooks::visibility::{reveal_classes, use_reveal_on_scroll};

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let section_ref = use_node_ref();
    let is_visible = use_reveal_on_scroll(section_ref.clone());
    let contact = &content::catalog().contact;

    html! {
        <section id="contact" ref={section_ref} class="contact-section">
            <div class="section-container">
                <div class={reveal_classes("section-heading", is_visible)}>
                    <h2>{"Get in Touch"}</h2>
                    <div class="section-rule"></div>
                    <p>{"Call, write or drop by. We are happy to help with orders, bulk supply or any question about our catch."}</p>
                </div>
                <div class={reveal_classes("contact-grid", is_visible)}>
                    <a class="contact-card" href={contact.tel_uri()}>
                        <span class="contact-card-icon">{"☎"}</span>
                        <h3>{"Call Us"}</h3>
                        <p>{&contact.phone}</p>
                    </a>
                    <a class="contact-card" href={contact.mailto_uri()}>
                        <span class="contact-card-icon">{"✉"}</span>
                        <h3>{"Email Us"}</h3>
                        <p>{&contact.email}</p>
                    </a>
                    <div class="contact-card">
                        <span class="contact-card-icon">{"📍"}</span>
                        <h3>{"Visit Us"}</h3>
                        <p>{&contact.address}</p>
                        if let Some(hours) = &contact.hours {
                            <p class="contact-hours">{hours}</p>
                        }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .contact-section {
                        padding: 5rem 0;
                        background: linear-gradient(180deg, #E8F4F8, #fff);
                    }

                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    .contact-card {
                        display: block;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: #fff;
                        text-align: center;
                        text-decoration: none;
                        box-shadow: 0 10px 25px rgba(0, 51, 102, 0.08);
                        transition: transform 0.3s ease;
                    }

                    a.contact-card:hover {
                        transform: translateY(-4px);
                    }

                    .contact-card-icon {
                        display: inline-flex;
                        width: 3.5rem;
                        height: 3.5rem;
                        margin-bottom: 1rem;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        background: rgba(255, 102, 0, 0.1);
                        font-size: 1.5rem;
                    }

                    .contact-card h3 {
                        color: #003366;
                        margin-bottom: 0.5rem;
                    }

                    .contact-card p {
                        color: #4b5563;
                    }

                    .contact-hours {
                        margin-top: 0.5rem;
                        color: #FF6600 !important;
                        font-weight: 600;
                    }

                    @media (max-width: 768px) {
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
