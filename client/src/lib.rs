//! Toll-gate traffic dashboard client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos app compiled twice: natively with `ssr` for the host's server
//! render, and to WASM with `hydrate` for the browser. Browser-only calls
//! (cookies, HTTP, meta tags) sit behind `#[cfg(feature = "hydrate")]` so the
//! state and formatting logic can be tested natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
