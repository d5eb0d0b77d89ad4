//! # ddpo-studio
//!
//! Leptos + WASM single-page client for a DDPO (Denoising Diffusion Policy
//! Optimization) image-generation service. The service does all the heavy
//! lifting behind a JSON-over-HTTP API; this crate is the presentational
//! front end: prompt and parameter editing, result browsing, a locally
//! persisted generation history, and health/progress polling.
//!
//! Browser-only code (HTTP, timers, `localStorage`) is gated behind the
//! `csr` cargo feature so the state layer and parsers test natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;
pub mod util;

/// WASM entry point: mounts the application into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
