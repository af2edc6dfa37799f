use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use crate::config::HEADER_OFFSET_PX;
use crate::{Page, Route};

/// Section id carried as navigation state when a section link is followed
/// from a page other than home.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollTarget(pub String);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollPlan {
    /// Go to `/` first; the home page scrolls once it has mounted.
    NavigateHome(ScrollTarget),
    ScrollAfterDelay { target: ScrollTarget, delay_ms: u32 },
}

pub fn plan_section_scroll(current: Option<&Route>, section: &str, settle_ms: u32) -> ScrollPlan {
    let target = ScrollTarget(section.to_string());
    match current.map(Route::page) {
        Some(Page::Home) => ScrollPlan::ScrollAfterDelay {
            target,
            delay_ms: settle_ms,
        },
        _ => ScrollPlan::NavigateHome(target),
    }
}

/// Document offset that puts an element just below the fixed header.
pub fn scroll_offset(element_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    element_top + page_y_offset - header_offset
}

/// Smooth-scrolls to the element with id `section`. Returns false, and does
/// nothing else, when there is no such element.
pub fn scroll_to_section(section: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(element) = window.document().and_then(|document| document.get_element_by_id(section)) else {
        debug!("Scroll target #{} not found", section);
        return false;
    };

    let page_y_offset = window.page_y_offset().unwrap_or(0.0);
    let top = scroll_offset(element.get_bounding_client_rect().top(), page_y_offset, HEADER_OFFSET_PX);
    smooth_scroll(&window, top);
    true
}

/// Schedules [`scroll_to_section`]. The timer is never cancelled.
pub fn scroll_to_section_after(section: String, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        scroll_to_section(&section);
    })
    .forget();
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        smooth_scroll(&window, 0.0);
    }
}

fn smooth_scroll(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_scrolls_in_place_after_settling() {
        let plan = plan_section_scroll(Some(&Route::Home), "pricing", 50);
        assert_eq!(
            plan,
            ScrollPlan::ScrollAfterDelay {
                target: ScrollTarget("pricing".to_string()),
                delay_ms: 50,
            }
        );
    }

    #[test]
    fn other_pages_navigate_home_with_the_target() {
        for route in [Route::PrivacyPolicy, Route::Privacy, Route::TermsOfService, Route::Terms] {
            assert_eq!(
                plan_section_scroll(Some(&route), "contact", 50),
                ScrollPlan::NavigateHome(ScrollTarget("contact".to_string()))
            );
        }
    }

    #[test]
    fn unmatched_location_navigates_home() {
        assert_eq!(
            plan_section_scroll(None, "about", 50),
            ScrollPlan::NavigateHome(ScrollTarget("about".to_string()))
        );
    }

    #[test]
    fn offset_accounts_for_scroll_position_and_header() {
        assert_eq!(scroll_offset(300.0, 0.0, 80.0), 220.0);
        assert_eq!(scroll_offset(300.0, 1200.0, 80.0), 1420.0);
        assert_eq!(scroll_offset(-500.0, 2000.0, 80.0), 1420.0);
    }
}
