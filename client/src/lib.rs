//! # stockdesk-client
//!
//! Leptos + WASM frontend for the Stockdesk branch inventory dashboard.
//!
//! This crate contains pages, components, application state, network types,
//! and the pure helpers behind the dashboard: route gating, inventory ratios,
//! error-message normalization and UGX formatting. The root crate renders it
//! server-side and serves the hydrate bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
