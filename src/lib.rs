//! # asset-client
//!
//! Leptos + WASM frontend for the asset registry REST API.
//!
//! Renders a creation form and the asset list, posts new assets, deletes
//! them by id, and re-renders the list from the server after every change.
//! `controller` holds the request/re-render flow; `net` talks HTTP;
//! `state` and `components` are the view layer.


pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod state;

/// Browser entry point: logging, panic hook, config, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let loaded = config::ClientConfig::from_document();
    let config = loaded.clone().unwrap_or_default();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&logger_init_failed_message(&e).into());
    }
    if let Err(e) = loaded {
        log::warn!("falling back to default config: {e}");
    }
    log::info!("asset client using {}", config.base_url);

    leptos::mount::mount_to_body(move || view! { <app::App config=config.clone()/> });
}

#[cfg(any(test, feature = "csr"))]
fn logger_init_failed_message(err: &dyn std::fmt::Display) -> String {
    format!("asset client logging disabled: {err}")
}
