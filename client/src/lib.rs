//! # client
//!
//! Leptos frontend for the Brickyard creator. Pages own state and hand
//! read-only projections to the panel components; all scene semantics live
//! in the `scene` crate so they can be tested without a browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
