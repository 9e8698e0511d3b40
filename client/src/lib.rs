//! # client
//!
//! Leptos + WASM chat widget for the rule generator endpoint.
//!
//! The widget binds to the chat markup the host page already ships, opens one
//! websocket to the hosting origin, renders bot replies through the
//! `messages` pipeline (YAML detection, markdown, highlighting) and offers a
//! copy button for generated rules. Browser-only code is gated
//! behind the `csr` feature so the crate still builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
#[cfg(feature = "csr")]
pub mod host;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging, then attach to the host page's widget
/// markup, or render the whole widget into `<body>` when the page has none.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }

    let config = config::WidgetConfig::default();
    match host::HostElements::find() {
        Some(elements) => host::mount(elements, config),
        None => leptos::mount::mount_to_body(move || view! { <App config/> }),
    }
}
