//! # studio-ui
//!
//! Leptos + WASM frontend for the slide studio: a three-pane workspace with
//! an AI copilot composer, a slide navigator, and a zoomable live preview.
//!
//! The crate is compiled twice: with `ssr` it is linked into `studio-server`
//! for server rendering, and with `hydrate` it is built to WASM and takes
//! over the server-rendered markup in the browser.

pub mod app;
pub mod components;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
