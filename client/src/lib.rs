//! # client
//!
//! Leptos UI for the search homepage.
//!
//! This crate contains the page shell, the presentational components, and the
//! logo section that hosts the `logo` engine. With the `ssr` feature the page
//! renders on the server; with `hydrate` it becomes interactive in the browser
//! and drives the engine from DOM events and an animation-frame loop.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
