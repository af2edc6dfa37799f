use std::rc::Rc;

use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SCROLL_SETTLE_MS;
use crate::utils::scroll::{plan_section_scroll, scroll_to_section_after, scroll_to_top, ScrollPlan, ScrollTarget};
use crate::Route;

/// Callback taking a section id: scrolls there on the home page, or goes
/// home first and lets [`use_pending_section_scroll`] finish the job.
#[hook]
pub fn use_section_scroll() -> Callback<&'static str> {
    let navigator = use_navigator();
    let route = use_route::<Route>();

    Callback::from(move |section: &'static str| {
        match plan_section_scroll(route.as_ref(), section, SCROLL_SETTLE_MS) {
            ScrollPlan::NavigateHome(target) => match &navigator {
                Some(navigator) => navigator.push_with_state(&Route::Home, target),
                None => warn!("No router in scope, cannot navigate to #{}", section),
            },
            ScrollPlan::ScrollAfterDelay { target, delay_ms } => scroll_to_section_after(target.0, delay_ms),
        }
    })
}

/// Callback for logo clicks: back to `/` and to the top of the page.
#[hook]
pub fn use_go_home() -> Callback<MouseEvent> {
    let navigator = use_navigator();

    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
        scroll_to_top();
    })
}

/// Runs on the home page: finishes a section scroll that started on another page.
#[hook]
pub fn use_pending_section_scroll() {
    let pending = use_location().and_then(|location| location.state::<ScrollTarget>());

    use_effect_with_deps(
        |pending: &Option<Rc<ScrollTarget>>| {
            if let Some(target) = pending {
                scroll_to_section_after(target.0.clone(), SCROLL_SETTLE_MS);
            }
            || ()
        },
        pending,
    );
}
