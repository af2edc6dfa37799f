//! Mounting the app into the host page, and the fallback panel shown when
//! that fails.

use std::any::Any;
use std::cell::Cell;
use std::fmt::Display;

use gloo_timers::callback::Timeout;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};
use yew::{AppHandle, BaseComponent, Renderer};

use crate::config::{LOADING_INDICATOR_ID, ROOT_ELEMENT_ID};

thread_local! {
    // Set once the error panel is up. Rendering is async, so a panic can land
    // after the hide timer was armed.
    static FAILED: Cell<bool> = Cell::new(false);
}

fn mark_failed() {
    FAILED.with(|failed| failed.set(true));
}

pub fn has_failed() -> bool {
    FAILED.with(Cell::get)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BootError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Document not available")]
    NoDocument,
    #[error("Root element not found")]
    MissingRoot,
}

pub fn failure_message(reason: &dyn Display) -> String {
    format!("Failed to initialize application: {}", reason)
}

fn document() -> Result<Document, BootError> {
    web_sys::window()
        .ok_or(BootError::NoWindow)?
        .document()
        .ok_or(BootError::NoDocument)
}

pub fn root_element(document: &Document) -> Result<Element, BootError> {
    document
        .get_element_by_id(ROOT_ELEMENT_ID)
        .ok_or(BootError::MissingRoot)
}

/// Renders `COMP` into `#root`.
pub fn mount<COMP>() -> Result<AppHandle<COMP>, BootError>
where
    COMP: BaseComponent,
    COMP::Properties: Default,
{
    let root = root_element(&document()?)?;
    Ok(Renderer::<COMP>::with_root(root).render())
}

/// Replaces the default panic hook so a panic while rendering also swaps
/// the loading placeholder for the error panel.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        show_failure(&failure_message(&panic_reason(info.payload())));
    }));
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(reason) = payload.downcast_ref::<&str>() {
        reason.to_string()
    } else if let Some(reason) = payload.downcast_ref::<String>() {
        reason.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Hides the loading placeholder after `delay_ms`, unless a failure has been
/// shown in it by then.
pub fn hide_loading_indicator_after(delay_ms: u32) {
    Timeout::new(delay_ms, || {
        if has_failed() {
            return;
        }
        let indicator = document()
            .ok()
            .and_then(|document| document.get_element_by_id(LOADING_INDICATOR_ID));
        if let Some(indicator) = indicator {
            let _ = indicator.class_list().add_1("hidden");
        }
    })
    .forget();
}

/// Logs `message` and shows it in the loading placeholder together with a
/// reload button.
pub fn show_failure(message: &str) {
    mark_failed();
    gloo_console::error!("Application error:", message.to_string());
    if let Err(err) = render_failure_panel(message) {
        gloo_console::error!("Could not render the error panel:", err);
    }
}

fn render_failure_panel(message: &str) -> Result<(), JsValue> {
    let document = document().map_err(|err| JsValue::from_str(&err.to_string()))?;
    let Some(indicator) = document.get_element_by_id(LOADING_INDICATOR_ID) else {
        return Ok(());
    };

    let panel = document.create_element("div")?;
    panel.set_class_name("boot-error");

    let heading = document.create_element("h1")?;
    heading.set_text_content(Some("Error Loading Application"));

    let detail = document.create_element("p")?;
    detail.set_text_content(Some(message));

    let reload_button = document.create_element("button")?.dyn_into::<HtmlElement>().map_err(JsValue::from)?;
    reload_button.set_class_name("boot-error-reload");
    reload_button.set_text_content(Some("Refresh Page"));
    let reload = Closure::<dyn FnMut()>::new(reload_page);
    reload_button.set_onclick(Some(reload.as_ref().unchecked_ref()));
    reload.forget();

    panel.append_child(&heading)?;
    panel.append_child(&detail)?;
    panel.append_child(&reload_button)?;

    indicator.set_inner_html("");
    indicator.append_child(&panel)?;
    indicator.class_list().remove_1("hidden")?;
    Ok(())
}

fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().reload() {
            gloo_console::error!("Reload failed:", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_root_message_matches_the_fallback_copy() {
        assert_eq!(
            failure_message(&BootError::MissingRoot),
            "Failed to initialize application: Root element not found"
        );
    }

    #[test]
    fn panic_payloads_become_readable_reasons() {
        let borrowed: Box<dyn Any + Send> = Box::new("render exploded");
        assert_eq!(panic_reason(borrowed.as_ref()), "render exploded");

        let owned: Box<dyn Any + Send> = Box::new(String::from("bad props"));
        assert_eq!(panic_reason(owned.as_ref()), "bad props");

        let opaque: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_reason(opaque.as_ref()), "unknown panic");
    }

    #[test]
    fn failure_flag_latches() {
        assert!(!has_failed());
        mark_failed();
        assert!(has_failed());
        mark_failed();
        assert!(has_failed());
    }
}
