use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::SECTION_LINKS;
use crate::components::logo::Logo;
use crate::content;
use crate::hooks::section_scroll::{use_go_home, use_section_scroll};
use crate::Route;

const SOCIAL_LINKS: [(&str, &str); 3] = [("Facebook", "f"), ("Instagram", "◎"), ("Twitter", "𝕏")];

#[function_component(Footer)]
pub fn footer() -> Html {
    let scroll_to = use_section_scroll();
    let go_home = use_go_home();
    let contact = &content::catalog().contact;
    let year = chrono::Local::now().year();

    let quick_link = |&(id, label): &(&'static str, &'static str)| {
        let scroll_to = scroll_to.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to.emit(id);
        });
        html! {
            <li>
                <button class="footer-link" {onclick}>{label}</button>
            </li>
        }
    };

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo" onclick={go_home}>
                            <Logo src="/images/logos/logo-dark.png" />
                        </div>
                        <p class="footer-tagline">
                            {"Bringing the finest catch from the Arabian Sea to your table. Rooted in tradition, committed to quality."}
                        </p>
                        <div class="footer-social">
                            { for SOCIAL_LINKS.iter().map(|&(name, glyph)| html! {
                                <a href="#" class="social-link" aria-label={name}>{glyph}</a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h3>{"Quick Links"}</h3>
                        <ul class="footer-list">
                            { for SECTION_LINKS.iter().map(quick_link) }
                        </ul>
                    </div>

                    <div>
                        <h3>{"Contact Info"}</h3>
                        <ul class="footer-list contact-list">
                            <li>
                                <span class="contact-icon">{"☎"}</span>
                                <a href={contact.tel_uri()}>{&contact.phone}</a>
                            </li>
                            <li>
                                <span class="contact-icon">{"✉"}</span>
                                <a href={contact.mailto_uri()}>{&contact.email}</a>
                            </li>
                            <li>
                                <span class="contact-icon">{"📍"}</span>
                                <span>{&contact.address}</span>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} Koli Catch. All rights reserved.", year)}</p>
                    <div class="legal-links">
                        <Link<Route> to={Route::PrivacyPolicy}>{"Privacy Policy"}</Link<Route>>
                        <Link<Route> to={Route::TermsOfService}>{"Terms of Service"}</Link<Route>>
                        // No refund page yet.
                        <a href="#">{"Refund Policy"}</a>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        background: #003366;
                        color: #fff;
                    }

                    .footer-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 3rem 1.5rem;
                    }

                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr;
                        gap: 2rem;
                        margin-bottom: 2rem;
                    }

                    .footer-logo {
                        cursor: pointer;
                        margin-bottom: 1rem;
                    }

                    .footer-logo .logo-image {
                        height: 64px;
                        width: auto;
                    }

                    .footer-logo .logo-fallback {
                        font-size: 1.875rem;
                        font-weight: 700;
                    }

                    .footer-tagline {
                        color: rgba(255, 255, 255, 0.8);
                        max-width: 28rem;
                        margin-bottom: 1.5rem;
                    }

                    .footer-social {
                        display: flex;
                        gap: 1rem;
                    }

                    .social-link {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        background: #FF6600;
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-decoration: none;
                    }

                    .site-footer h3 {
                        font-size: 1.125rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }

                    .footer-list {
                        list-style: none;
                        padding: 0;
                    }

                    .footer-list li {
                        margin-bottom: 0.6rem;
                    }

                    .footer-link,
                    .footer-list a {
                        background: none;
                        border: none;
                        padding: 0;
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 1rem;
                        text-decoration: none;
                        cursor: pointer;
                        transition: color 0.3s ease;
                    }

                    .footer-link:hover,
                    .footer-list a:hover {
                        color: #fff;
                    }

                    .contact-list li {
                        display: flex;
                        gap: 0.75rem;
                        color: rgba(255, 255, 255, 0.8);
                    }

                    .contact-icon {
                        color: #FF6600;
                    }

                    .footer-bottom {
                        border-top: 1px solid rgba(255, 255, 255, 0.2);
                        padding-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 1rem;
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 0.875rem;
                    }

                    .footer-bottom .legal-links {
                        display: flex;
                        gap: 1.5rem;
                    }

                    .footer-bottom .legal-links a {
                        color: rgba(255, 255, 255, 0.6);
                        text-decoration: none;
                    }

                    .footer-bottom .legal-links a:hover {
                        color: #fff;
                    }

                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
