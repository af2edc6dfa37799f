use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod bootstrap;
pub mod config;
pub mod content;
pub mod hooks {
    pub mod section_scroll;
    pub mod visibility;
}
pub mod utils {
    pub mod preloader;
    pub mod scroll;
}
pub mod components {
    pub mod about;
    pub mod business;
    pub mod contact;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod legal;
    pub mod logo;
    pub mod pricing;
    pub mod scroll_top;
    pub mod varieties;
}
pub mod pages {
    pub mod home;
    pub mod privacy;
    pub mod terms;
}

use pages::{home::HomePage, privacy::PrivacyPolicy, terms::TermsOfService};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy-policy")]
    PrivacyPolicy,
    #[at("/terms-of-service")]
    TermsOfService,
    // Older links still in circulation.
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Privacy,
    Terms,
}

impl Route {
    pub fn page(&self) -> Page {
        match self {
            Route::Home => Page::Home,
            Route::PrivacyPolicy | Route::Privacy => Page::Privacy,
            Route::TermsOfService | Route::Terms => Page::Terms,
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route.page() {
        Page::Home => {
            info!("Rendering Home page");
            html! { <HomePage /> }
        }
        Page::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Page::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="App">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTE_TABLE: [(&str, Page); 5] = [
        ("/", Page::Home),
        ("/privacy-policy", Page::Privacy),
        ("/terms-of-service", Page::Terms),
        ("/privacy", Page::Privacy),
        ("/terms", Page::Terms),
    ];

    #[test]
    fn every_path_resolves_to_its_page() {
        for (path, page) in ROUTE_TABLE {
            let route = Route::recognize(path).unwrap_or_else(|| panic!("{} should match", path));
            assert_eq!(route.page(), page, "{}", path);
        }
    }

    #[test]
    fn aliases_render_the_same_page_as_their_canonical_route() {
        for (alias, canonical) in [("/privacy", "/privacy-policy"), ("/terms", "/terms-of-service")] {
            let alias = Route::recognize(alias).unwrap();
            let canonical = Route::recognize(canonical).unwrap();
            assert_ne!(alias, canonical);
            assert_eq!(alias.page(), canonical.page());
        }
    }

    #[test]
    fn each_page_has_exactly_one_canonical_route() {
        let canonical = [Route::Home, Route::PrivacyPolicy, Route::TermsOfService];
        let pages: Vec<Page> = canonical.iter().map(Route::page).collect();
        assert_eq!(pages, vec![Page::Home, Page::Privacy, Page::Terms]);
    }

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::PrivacyPolicy.to_path(), "/privacy-policy");
        assert_eq!(Route::Terms.to_path(), "/terms");
    }

    #[test]
    fn unknown_paths_do_not_match() {
        assert_eq!(Route::recognize("/refund-policy"), None);
        assert_eq!(Route::recognize("/privacy-policy/extra"), None);
    }
}
