//! # client
//!
//! Leptos + WASM frontend for the marketplace storefront: browse and search
//! listings, sign in or register, and publish listings with client-side
//! image staging.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the marketplace API. The `ssr` feature renders the same app on
//! the server; the `hydrate` feature builds the browser bundle.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
