//! # client
//!
//! Leptos frontend for DockNow. Pages, components, state slices, and the
//! REST helpers that talk to the `server` mock API. The same crate renders
//! on the server (`ssr`) and hydrates in the browser (`hydrate`).

#![recursion_limit = "256"]

pub mod actions;
pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
