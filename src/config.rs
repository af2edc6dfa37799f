use log::Level;

/// Height of the fixed header, subtracted from every in-page scroll target.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Sections are revealed this far before they actually enter the viewport.
pub const VIEWPORT_MARGIN_PX: f64 = 200.0;

/// Delay before scrolling on the home page so layout can settle.
pub const SCROLL_SETTLE_MS: u32 = 50;

/// Delay before the home page starts preloading images.
pub const PRELOAD_DELAY_MS: u32 = 100;

/// Delay before the loading placeholder is hidden after mount.
pub const LOADING_HIDE_DELAY_MS: u32 = 100;

pub const HEADER_SCROLLED_THRESHOLD_PX: f64 = 50.0;

pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

pub const ROOT_ELEMENT_ID: &str = "root";
pub const LOADING_INDICATOR_ID: &str = "loading-indicator";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
