//! # portfolio-client
//!
//! Client-side behavior layer for a single-page portfolio site, compiled to
//! WebAssembly. Attaches theme toggling, scroll-position navigation
//! highlighting, contact-form validation with transient notifications,
//! scroll-triggered reveal animations, smooth in-page scrolling, and a
//! cursor spotlight to externally authored static markup.
//!
//! All browser integration is gated behind the `hydrate` feature. Without it
//! every entry point compiles to a callable no-op, so the logic-level test
//! suite runs natively with plain `cargo test`.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Wasm entry point: install diagnostics, then mount every page behavior.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    app::mount();
}
