//! # voyages-client
//!
//! Leptos + WASM frontend for managing shipping voyages: a list page with a
//! create-voyage form (vessel and unit-type lookups), per-row delete, and
//! toast feedback.
//!
//! Backend endpoints (`/api/voyage/*`, `/api/vessel/getAll`,
//! `/api/unitType/getAll`) live outside this crate; the client talks to them
//! through `net::api` and keeps list reads fresh through the explicit
//! `state::cache::QueryCache`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: initialize browser logging and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
