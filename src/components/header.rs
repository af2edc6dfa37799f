use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::logo::Logo;
use crate::config::HEADER_SCROLLED_THRESHOLD_PX;
use crate::hooks::section_scroll::{use_go_home, use_section_scroll};

/// In-page sections reachable from the header and footer, as (id, label).
pub const SECTION_LINKS: [(&str, &str); 5] = [
    ("about", "About Us"),
    ("varieties", "Our Fish"),
    ("business", "Services"),
    ("pricing", "Pricing"),
    ("contact", "Contact"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let scroll_to = use_section_scroll();
    let go_home = use_go_home();

    let is_scrolled = scroll_y > HEADER_SCROLLED_THRESHOLD_PX;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let section_link = |id: &'static str, label: &'static str, class: &'static str| {
        let menu_open = menu_open.clone();
        let scroll_to = scroll_to.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to.emit(id);
        });
        html! {
            <button class={class} {onclick}>{label}</button>
        }
    };

    let menu_class = if *menu_open {
        "header-nav mobile-menu-open"
    } else {
        "header-nav"
    };

    html! {
        <header class={classes!("site-header", is_scrolled.then_some("scrolled"))}>
            <div class="header-content">
                <a href="/" class="header-logo" onclick={go_home}>
                    <Logo src="/images/logos/logo.png" />
                </a>

                <button class="burger-menu" aria-label="Toggle navigation" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={menu_class}>
                    { for SECTION_LINKS.iter().map(|&(id, label)| section_link(id, label, "nav-link")) }
                    { section_link("contact", "Order Now", "nav-cta") }
                </nav>
            </div>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 80px;
                        z-index: 40;
                        background: rgba(255, 255, 255, 0.92);
                        backdrop-filter: blur(8px);
                        transition: box-shadow 0.3s ease, background 0.3s ease;
                    }

                    .site-header.scrolled {
                        background: #fff;
                        box-shadow: 0 4px 20px rgba(0, 51, 102, 0.12);
                    }

                    .header-content {
                        max-width: 80rem;
                        height: 100%;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .header-logo .logo-image {
                        height: 56px;
                        width: auto;
                    }

                    .header-logo .logo-fallback {
                        font-size: 1.75rem;
                        font-weight: 700;
                        color: #003366;
                    }

                    .header-nav {
                        display: flex;
                        align-items: center;
                        gap: 1.75rem;
                    }

                    .nav-link {
                        background: none;
                        border: none;
                        color: #003366;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: color 0.3s ease;
                    }

                    .nav-link:hover {
                        color: #FF6600;
                    }

                    .nav-cta {
                        padding: 0.6rem 1.4rem;
                        border: none;
                        border-radius: 999px;
                        background: #FF6600;
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }

                    .burger-menu span {
                        width: 26px;
                        height: 3px;
                        background: #003366;
                        border-radius: 2px;
                    }

                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }

                        .header-nav {
                            display: none;
                            position: absolute;
                            top: 80px;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1.5rem;
                            background: #fff;
                            box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1);
                        }

                        .header-nav.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
