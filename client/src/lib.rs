//! # client
//!
//! Leptos UI for the Tektonika corporate site: routed pages inside a shared
//! layout, the careers intake wizard, and the contact forms. Form rules live
//! in the `forms` crate; this crate renders them and posts finished
//! submissions to the server API.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
