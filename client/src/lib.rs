//! # folio-client
//!
//! Leptos + WASM front end for a single-page professional portfolio.
//!
//! The page is rendered on the server and hydrated in the browser. Page
//! behavior (section highlighting, theme switching, scroll reveals, the
//! project overlay and the contact form) is decided by plain state types in
//! [`state`] and wired to the DOM by [`components`] and [`util`].

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod content;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    leptos::mount::hydrate_body(app::App);
}
