//! Browser tests. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};
use yew::prelude::*;
use yew_router::history::{BrowserHistory, History};

use kolicatch_web::bootstrap::{self, BootError};
use kolicatch_web::hooks::visibility::use_reveal_on_scroll;
use kolicatch_web::utils::preloader::preload_images;
use kolicatch_web::utils::scroll::{scroll_to_section, scroll_to_section_after, ScrollTarget};
use kolicatch_web::App;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount_point(id: &str) -> Element {
    let document = document();
    let element = document.create_element("div").unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

#[function_component(RevealedBlock)]
fn revealed_block() -> Html {
    let node = use_node_ref();
    let visible = use_reveal_on_scroll(node.clone());
    html! {
        <div ref={node} class={if visible { "block shown" } else { "block hidden" }}>{"block"}</div>
    }
}

fn block_class(host: &Element) -> String {
    host.query_selector(".block").unwrap().unwrap().class_name()
}

#[wasm_bindgen_test]
async fn section_on_screen_is_revealed_at_mount() {
    let host = mount_point("block-on-screen");
    let _ = yew::Renderer::<RevealedBlock>::with_root(host.clone()).render();
    TimeoutFuture::new(50).await;

    assert_eq!(block_class(&host), "block shown");
    host.remove();
}

#[wasm_bindgen_test]
async fn section_below_the_fold_reveals_on_scroll_and_stays_revealed() {
    let window = web_sys::window().unwrap();
    let spacer = mount_point("block-spacer");
    spacer.set_attribute("style", "height: 5000px;").unwrap();
    let host = mount_point("block-below-fold");

    let _ = yew::Renderer::<RevealedBlock>::with_root(host.clone()).render();
    TimeoutFuture::new(100).await;
    assert_eq!(block_class(&host), "block hidden");

    window.scroll_to_with_x_and_y(0.0, 5000.0);
    TimeoutFuture::new(300).await;
    assert_eq!(block_class(&host), "block shown");

    window.scroll_to_with_x_and_y(0.0, 0.0);
    TimeoutFuture::new(300).await;
    assert_eq!(block_class(&host), "block shown");

    host.remove();
    spacer.remove();
}

#[wasm_bindgen_test]
fn missing_scroll_target_is_a_no_op() {
    assert!(!scroll_to_section("no-such-section"));
}

#[wasm_bindgen_test]
fn existing_scroll_target_is_found() {
    let target = mount_point("pricing-target");
    assert!(scroll_to_section("pricing-target"));
    target.remove();
}

#[wasm_bindgen_test]
async fn unreachable_images_do_not_reach_the_caller() {
    preload_images(["http://127.0.0.1:9/missing.png", "/images/nowhere/none.jpeg"]);
    preload_images(Vec::<String>::new());
    TimeoutFuture::new(100).await;
}

#[wasm_bindgen_test]
fn missing_root_shows_the_fallback_panel() {
    let document = document();
    if let Some(root) = document.get_element_by_id("root") {
        root.remove();
    }
    let indicator = mount_point("loading-indicator");
    indicator.set_class_name("hidden");

    let err = bootstrap::mount::<App>().err();
    assert_eq!(err, Some(BootError::MissingRoot));

    bootstrap::show_failure(&bootstrap::failure_message(&BootError::MissingRoot));

    assert!(!indicator.class_list().contains("hidden"));
    let message = indicator.query_selector(".boot-error p").unwrap().unwrap();
    assert_eq!(
        message.text_content().as_deref(),
        Some("Failed to initialize application: Root element not found")
    );
    let reload = indicator
        .query_selector(".boot-error-reload")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    assert_eq!(reload.text_content().as_deref(), Some("Refresh Page"));
    // Not clicked: a reload would tear down the test runner page.
    assert!(reload.onclick().is_some());

    indicator.remove();
}

#[wasm_bindgen_test]
async fn failure_panel_survives_the_hide_timer() {
    let indicator = mount_point("loading-indicator");

    bootstrap::hide_loading_indicator_after(0);
    bootstrap::show_failure("Failed to initialize application: render exploded");
    TimeoutFuture::new(50).await;

    assert!(bootstrap::has_failed());
    assert!(!indicator.class_list().contains("hidden"));
    assert!(indicator.query_selector(".boot-error").unwrap().is_some());

    indicator.remove();
}

#[wasm_bindgen_test]
async fn footer_link_on_a_legal_page_goes_home_with_a_scroll_target() {
    let window = web_sys::window().unwrap();
    window
        .history()
        .unwrap()
        .push_state_with_url(&JsValue::NULL, "", Some("/privacy-policy"))
        .unwrap();

    let host = mount_point("cross-page-app");
    let handle = yew::Renderer::<App>::with_root(host.clone()).render();
    TimeoutFuture::new(50).await;

    let first_link = host
        .query_selector(".footer-link")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    first_link.click();
    TimeoutFuture::new(150).await;

    assert_eq!(window.location().pathname().unwrap(), "/");
    let state = BrowserHistory::new().location().state::<ScrollTarget>();
    assert_eq!(state.as_deref(), Some(&ScrollTarget("about".to_string())));
    assert!(host.query_selector("#about").unwrap().is_some());

    scroll_to_section_after("missing-section".to_string(), 0);
    TimeoutFuture::new(20).await;

    handle.destroy();
    host.remove();
}
