//! # hr-client
//!
//! Leptos + WASM frontend for the HR management portal.
//!
//! This crate contains the login page, the admin and employee dashboards,
//! the REST client for the HR backend, and the session store that carries
//! the bearer token between them. The `hr-server` crate renders it with SSR
//! and the `hydrate` feature mounts it in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
