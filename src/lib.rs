//! # taskboard
//!
//! Leptos + WASM frontend for a role-gated task-management API.
//!
//! The crate is a client-side-rendered single-page app: an in-memory
//! session (access token + profile), an HTTP gateway with a transparent
//! refresh-and-retry cycle, pure authorization predicates, and the pages
//! and components built on top of them. Browser-only code is gated behind
//! the `csr` feature so the core logic tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: set up panic reporting and console logging, then
/// mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
