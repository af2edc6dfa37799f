use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::{
    about::AboutSection, business::BusinessModelSection, contact::ContactSection, footer::Footer,
    header::Header, hero::HeroSection, pricing::PricingSection, varieties::FishVarietiesSection,
};
use crate::config::PRELOAD_DELAY_MS;
use crate::content;
use crate::hooks::section_scroll::use_pending_section_scroll;
use crate::utils::preloader::preload_images;

#[function_component]
pub fn HomePage() -> Html {
    // Warm the image cache once, after the first paint.
    use_effect_with_deps(
        |_| {
            Timeout::new(PRELOAD_DELAY_MS, || {
                preload_images(content::catalog().preload_urls());
            })
            .forget();
            || ()
        },
        (),
    );

    use_pending_section_scroll();

    html! {
        <div class="homepage">
            <Header />
            <HeroSection />
            <AboutSection />
            <FishVarietiesSection />
            <BusinessModelSection />
            <PricingSection />
            <ContactSection />
            <Footer />
            <style>
                {r#"
                    .section-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .section-heading h2 {
                        color: #003366;
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }

                    .section-rule {
                        width: 6rem;
                        height: 4px;
                        margin: 0 auto 1.5rem;
                        background: #FF6600;
                    }

                    .section-heading p {
                        max-width: 48rem;
                        margin: 0 auto;
                        color: #374151;
                        font-size: 1.125rem;
                        line-height: 1.7;
                    }

                    .reveal {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 150ms ease-out, transform 150ms ease-out;
                        will-change: transform, opacity;
                    }

                    .reveal.is-visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                "#}
            </style>
        </div>
    }
}
