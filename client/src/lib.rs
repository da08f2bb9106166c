//! # client
//!
//! Leptos + WASM frontend for the RSS Deck feed reader.
//!
//! This crate contains pages, components, application state, the cookie
//! session store, and the REST bindings to the aggregation backend. It is
//! rendered server-side by the `server` crate and hydrated in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
