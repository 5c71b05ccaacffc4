//! # hams
//!
//! Leptos + WASM front end for the hospital appointment management system.
//!
//! Session and role resolution live in the browser-independent `session`
//! crate. This crate binds it to the browser: `localStorage`, the `Date`
//! clock, `gloo-net` HTTP calls, a reactive session context, route guards,
//! and the login, registration, and dashboard pages.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
