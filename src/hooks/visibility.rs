//! Scroll-triggered reveal shared by every home page section.
//!
//! A section starts hidden and is revealed once its container comes within
//! [`VIEWPORT_MARGIN_PX`] of the viewport. Once revealed it stays revealed.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::VIEWPORT_MARGIN_PX;

/// True when an element whose top edge sits at `top` (relative to the
/// viewport) is inside the viewport grown by `margin` pixels.
pub fn within_reveal_margin(top: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height + margin
}

/// One-way false -> true flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Feeds one observation. Returns true only for the observation that
    /// flips the latch; every later call returns false.
    pub fn observe(&mut self, in_range: bool) -> bool {
        if self.revealed || !in_range {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Class list for an element that fades and slides in with its section.
pub fn reveal_classes(base: &'static str, visible: bool) -> Classes {
    classes!(base, "reveal", visible.then_some("is-visible"))
}

struct Subscription {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[hook]
pub fn use_reveal_on_scroll(node: NodeRef) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let subscription = node.cast::<Element>().and_then(|element| {
                    let latch = Rc::new(Cell::new(RevealLatch::default()));
                    let reveal = {
                        let visible = visible.clone();
                        move |in_range: bool| {
                            let mut current = latch.get();
                            if current.observe(in_range) {
                                visible.set(true);
                            }
                            latch.set(current);
                        }
                    };

                    // Checked synchronously so content already on screen never flashes hidden.
                    reveal(initially_in_view(&element));

                    match subscribe(&element, reveal) {
                        Ok(subscription) => Some(subscription),
                        Err(err) => {
                            debug!("IntersectionObserver unavailable, revealing section: {:?}", err);
                            visible.set(true);
                            None
                        }
                    }
                });

                move || drop(subscription)
            },
            node,
        );
    }

    *visible
}

fn initially_in_view(element: &Element) -> bool {
    let viewport_height = web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    within_reveal_margin(element.get_bounding_client_rect().top(), viewport_height, VIEWPORT_MARGIN_PX)
}

fn subscribe(element: &Element, reveal: impl Fn(bool) + 'static) -> Result<Subscription, JsValue> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            reveal(intersecting);
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.0));
    options.set_root_margin(&format!("{}px", VIEWPORT_MARGIN_PX));

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(Subscription {
        observer,
        _callback: callback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_extends_below_the_fold() {
        assert!(within_reveal_margin(0.0, 800.0, 200.0));
        assert!(within_reveal_margin(950.0, 800.0, 200.0));
        assert!(!within_reveal_margin(1000.0, 800.0, 200.0));
        assert!(!within_reveal_margin(1500.0, 800.0, 200.0));
    }

    #[test]
    fn content_scrolled_past_still_counts() {
        assert!(within_reveal_margin(-2400.0, 800.0, 200.0));
    }

    #[test]
    fn latch_flips_exactly_once() {
        let mut latch = RevealLatch::default();
        assert_eq!(latch, RevealLatch { revealed: false });

        assert!(!latch.observe(false));
        assert_eq!(latch, RevealLatch { revealed: false });

        assert!(latch.observe(true));
        assert_eq!(latch, RevealLatch { revealed: true });

        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert_eq!(latch, RevealLatch { revealed: true });
    }

    #[test]
    fn latch_never_reverts_over_a_scroll_sequence() {
        let mut latch = RevealLatch::default();
        let observations = [false, false, true, false, true, false, false];
        let flips = observations.iter().filter(|&&seen| latch.observe(seen)).count();
        assert_eq!(flips, 1);
        assert_eq!(latch, RevealLatch { revealed: true });
    }
}
