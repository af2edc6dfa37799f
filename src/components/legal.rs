//! Layout shared by the privacy policy and terms of service pages.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::scroll_top::ScrollTopButton;
use crate::content::{self, Bullet, ContactCard, Icon, LegalDocument, PolicySection};
use crate::utils::scroll::scroll_to_top;
use crate::Route;

/// Splits a heading so its last word can be rendered in the accent colour.
pub fn split_heading(heading: &str) -> (&str, &str) {
    match heading.rsplit_once(' ') {
        Some((lead, last)) => (lead, last),
        None => ("", heading),
    }
}

#[derive(Properties, PartialEq)]
struct PolicyCardProps {
    section: &'static PolicySection,
    /// Position across both card lists, drives the staggered fade-in.
    order: usize,
    #[prop_or_default]
    featured: bool,
}

#[function_component(PolicyCard)]
fn policy_card(props: &PolicyCardProps) -> Html {
    let section = props.section;
    let style = format!("animation: fadeInUp 0.6s ease-out {:.1}s both;", props.order as f64 * 0.1);

    html! {
        <div class={classes!("policy-card", props.featured.then_some("featured"))} {style}>
            <div class="policy-card-header">
                if let Some(icon) = section.icon {
                    <span class="policy-icon">{icon.glyph()}</span>
                }
                <h3>{section.heading()}</h3>
            </div>
            <ul class="policy-card-body">
                { for section.bullets().map(|bullet| match bullet {
                    Bullet::Item(text) => html! { <li>{text}</li> },
                    Bullet::SubItem(text) => html! { <li class="sub-item">{text}</li> },
                }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ContactPanelProps {
    card: &'static ContactCard,
}

#[function_component(ContactPanel)]
fn contact_panel(props: &ContactPanelProps) -> Html {
    let card = props.card;
    let contact = &content::catalog().contact;

    html! {
        <div class="legal-contact">
            <div class="legal-contact-header">
                <span class="policy-icon">{card.icon.glyph()}</span>
                <h3>{&card.title}</h3>
            </div>
            <div class="legal-contact-body">
                <h4>{&card.heading}</h4>
                { for card.lines.iter().map(|line| html! { <p>{line}</p> }) }
                <div class="legal-contact-details">
                    if !card.address_lines.is_empty() {
                        <div class="legal-address">
                            <p class="label">{format!("{} Address:", Icon::MapPin.glyph())}</p>
                            { for card.address_lines.iter().map(|line| html! { <p>{line}</p> }) }
                        </div>
                    }
                    <a href={contact.mailto_uri()}>{format!("{} {}", Icon::Mail.glyph(), contact.email)}</a>
                    <a href={contact.tel_uri()}>{format!("{} {}", Icon::Phone.glyph(), contact.phone)}</a>
                    if let Some(response_time) = &card.response_time {
                        <p class="response-time">{format!("⏱ {}", response_time)}</p>
                    }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LegalPageProps {
    pub document: &'static LegalDocument,
    pub icon: Icon,
    pub class: &'static str,
}

#[function_component(LegalPage)]
pub fn legal_page(props: &LegalPageProps) -> Html {
    let document = props.document;
    let (lead, accent) = split_heading(&document.heading);

    use_effect_with_deps(
        |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    let main_count = document.main_sections.len();

    html! {
        <div class={classes!("legal-page", props.class)}>
            <Header />

            <section class="legal-breadcrumb">
                <div class="section-container breadcrumb-row">
                    <h2>{&document.heading}</h2>
                    <nav>
                        <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                        <span class="breadcrumb-sep">{"›"}</span>
                        <span>{&document.heading}</span>
                    </nav>
                </div>
            </section>

            <section class="legal-hero">
                <div class="legal-hero-icon">{props.icon.glyph()}</div>
                <h1>
                    {lead}{" "}
                    <span class="accent">{accent}</span>
                </h1>
                <p class="legal-subtitle">{&document.subtitle}</p>
                <p class="legal-updated">
                    {"Last Updated: "}
                    <span class="accent">{&document.last_updated}</span>
                </p>
            </section>

            <section class="legal-body">
                <div class="section-container">
                    <div class="policy-grid main">
                        { for document.main_sections.iter().enumerate().map(|(order, section)| html! {
                            <PolicyCard key={section.id.to_string()} {section} {order} featured=true />
                        }) }
                    </div>
                    <div class="policy-grid additional">
                        { for document.additional_sections.iter().enumerate().map(|(index, section)| html! {
                            <PolicyCard key={section.id.to_string()} {section} order={main_count + index} />
                        }) }
                    </div>

                    <ContactPanel card={&document.contact_card} />

                    <div class="legal-notice">
                        <h4>{"📄 Legal Notice"}</h4>
                        <p>{&document.legal_notice}</p>
                    </div>
                </div>
            </section>

            <ScrollTopButton />
            <Footer />

            <style>
                {r#"
                    @keyframes fadeInUp {
                        from {
                            opacity: 0;
                            transform: translateY(30px);
                        }
                        to {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }

                    .legal-page {
                        min-height: 100vh;
                        padding-top: 80px;
                        background: linear-gradient(180deg, #f8f8fb, #fff, #f8f8fb);
                    }

                    .legal-breadcrumb {
                        padding: 2rem 0;
                        background: linear-gradient(90deg, #003366, #004d99);
                        color: #fff;
                    }

                    .breadcrumb-row {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                    }

                    .breadcrumb-row h2 {
                        font-size: 1.875rem;
                    }

                    .breadcrumb-row nav {
                        color: rgba(255, 255, 255, 0.8);
                    }

                    .breadcrumb-row a {
                        color: rgba(255, 255, 255, 0.8);
                        text-decoration: none;
                    }

                    .breadcrumb-sep {
                        margin: 0 0.5rem;
                    }

                    .legal-hero {
                        padding: 3rem 1.5rem;
                        background: #fff;
                        text-align: center;
                    }

                    .legal-hero-icon {
                        display: inline-flex;
                        width: 5rem;
                        height: 5rem;
                        margin-bottom: 1.5rem;
                        align-items: center;
                        justify-content: center;
                        border-radius: 1rem;
                        background: linear-gradient(135deg, #FF6600, #ff8533);
                        font-size: 2.5rem;
                    }

                    .legal-hero h1 {
                        color: #003366;
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        margin-bottom: 1rem;
                    }

                    .legal-page .accent {
                        color: #FF6600;
                        font-weight: 600;
                    }

                    .legal-subtitle {
                        color: #4b5563;
                        font-size: 1.125rem;
                        margin-bottom: 1rem;
                    }

                    .legal-updated {
                        color: #6b7280;
                        font-size: 0.875rem;
                    }

                    .legal-body {
                        padding: 3rem 0 5rem;
                    }

                    .policy-grid {
                        display: grid;
                        gap: 1.5rem;
                        margin-bottom: 3rem;
                    }

                    .policy-grid.main {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .policy-grid.additional {
                        grid-template-columns: repeat(3, 1fr);
                    }

                    .policy-card {
                        border: 1px solid #e5e7eb;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        background: #fff;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }

                    .policy-card:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
                    }

                    .policy-card-header {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1rem 1.25rem;
                        border-bottom: 1px solid #e5e7eb;
                        color: #003366;
                    }

                    .policy-card.featured .policy-card-header {
                        background: linear-gradient(90deg, #003366, #004d99);
                        color: #fff;
                    }

                    .policy-icon {
                        display: inline-flex;
                        padding: 0.4rem;
                        border-radius: 0.5rem;
                        background: rgba(255, 255, 255, 0.2);
                    }

                    .policy-card-body {
                        list-style: none;
                        padding: 1.25rem;
                        margin: 0;
                    }

                    .policy-card-body li {
                        position: relative;
                        padding-left: 1.25rem;
                        margin-bottom: 0.6rem;
                        color: #374151;
                        line-height: 1.6;
                    }

                    .policy-card-body li::before {
                        content: "•";
                        position: absolute;
                        left: 0;
                        color: #FF6600;
                    }

                    .policy-card-body li.sub-item {
                        margin-left: 1rem;
                    }

                    .legal-contact {
                        margin-top: 1rem;
                        border: 2px solid rgba(255, 102, 0, 0.3);
                        border-radius: 0.75rem;
                        overflow: hidden;
                        background: linear-gradient(135deg, #fff5f0, #fff);
                    }

                    .legal-contact-header {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1.25rem 1.5rem;
                        background: linear-gradient(90deg, #FF6600, #ff8533);
                        color: #fff;
                    }

                    .legal-contact-body {
                        padding: 2rem;
                    }

                    .legal-contact-body h4 {
                        color: #003366;
                        font-size: 1.125rem;
                        margin-bottom: 0.75rem;
                    }

                    .legal-contact-details {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        background: #fff;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06);
                    }

                    .legal-contact-details a {
                        color: #FF6600;
                        text-decoration: none;
                    }

                    .legal-address .label {
                        color: #003366;
                        font-weight: 600;
                    }

                    .response-time {
                        color: #6b7280;
                        font-size: 0.875rem;
                    }

                    .legal-notice {
                        margin-top: 1.5rem;
                        padding: 1.5rem;
                        border: 2px solid rgba(255, 102, 0, 0.4);
                        border-radius: 0.75rem;
                        background: linear-gradient(135deg, #fff5f0, #ffe6d9);
                    }

                    .legal-notice h4 {
                        color: #003366;
                        margin-bottom: 0.5rem;
                    }

                    @media (max-width: 900px) {
                        .policy-grid.main,
                        .policy-grid.additional {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_word_of_a_heading_is_the_accent() {
        assert_eq!(split_heading("Privacy Policy"), ("Privacy", "Policy"));
        assert_eq!(split_heading("Terms & Conditions"), ("Terms &", "Conditions"));
    }

    #[test]
    fn single_word_heading_is_all_accent() {
        assert_eq!(split_heading("Legal"), ("", "Legal"));
    }
}
