//! # client
//!
//! Leptos + WASM frontend for the voting administration desk.
//!
//! This crate contains the admin and voter pages, shared components, session
//! state, REST DTOs, and the camera capture helpers used by face registration
//! and face authentication. Every backend call goes through `net::api`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
