//! # client
//!
//! Leptos + WASM frontend pieces for modal dialogs: alert and confirm state
//! hooks, the dialogs that render them, the page scroll lock they share, and
//! the Arabic/English language toggle.
//!
//! State models under [`state`] are plain Rust values so they can be tested
//! without a browser; [`components`] wire them into Leptos views and
//! [`util`] isolates the `web-sys` glue.

pub mod app;
pub mod components;
pub mod i18n;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the logger and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
