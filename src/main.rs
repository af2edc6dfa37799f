use kolicatch_web::{bootstrap, config, App};
use log::info;

fn main() {
    // Installed before anything renders so a panic still reaches the page.
    bootstrap::install_panic_hook();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::warn!("Logger already initialised:", err.to_string());
    }

    info!("Starting application");
    match bootstrap::mount::<App>() {
        Ok(_) => bootstrap::hide_loading_indicator_after(config::LOADING_HIDE_DELAY_MS),
        Err(err) => bootstrap::show_failure(&bootstrap::failure_message(&err)),
    }
}
