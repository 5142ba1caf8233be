//! # budgetai-client
//!
//! Leptos + WASM frontend for BudgetAI, a personal-budgeting web app.
//!
//! This crate contains routes and guards, pages, components, application
//! state, and the HTTP gateway to the BudgetAI backend. The host binary
//! renders [`app::shell`] on the server; the `hydrate` feature builds the
//! browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
