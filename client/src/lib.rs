//! Leptos client for the CANFS Financial Needs Analysis app.
//!
//! ARCHITECTURE
//! ============
//! Pages own route-scoped orchestration (guard mirror, API calls) and
//! delegate rendering details to `components`. Session and guard helpers
//! live in `util`; the FNA form's local state is an explicit reducer in
//! `state` rather than ad-hoc flags.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
