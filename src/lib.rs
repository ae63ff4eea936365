//! # solution-desk
//!
//! Leptos + WASM frontend for The Solution Desk, a team productivity
//! workspace: idea submission, a Kanban board, an SOP library, a KPI
//! dashboard, comments, and notifications, backed by a thin REST API.
//!
//! This crate contains pages, components, application state, network
//! types, and the HTTP request pipeline that attaches the bearer
//! credential and escalates authorization failures to a forced logout.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for the hydrated client build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
