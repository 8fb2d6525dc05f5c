//! # cragtrack
//!
//! Leptos + WASM frontend for the Cragtrack climbing tracker. A thin
//! presentation and data-entry layer over the remote Cragtrack HTTP API:
//! sign-up/sign-in, a dashboard of summary stats, a logbook of climbs, and
//! training-session logging with nested boulder/rope-climb records.
//!
//! This crate contains pages, components, application state, the typed
//! domain services, and the HTTP client that talks to the backend. All
//! durable state and business rules live server-side.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod stats;
pub mod util;

/// Client-side entry point: install the panic hook and console logger,
/// then hydrate the server-rendered document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
