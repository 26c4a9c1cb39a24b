//! Scale Notation WASM Module
//!
//! Spells scales from a starting note and a W/H/3 interval pattern, applies a
//! key signature, and places every note on a treble or bass staff as
//! staff-font glyphs.

pub mod errors;
pub mod models;
pub mod renderers;
pub mod config;
pub mod api;

// Re-export commonly used types
pub use errors::NotationError;
pub use models::*;
pub use config::NotationConfig;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        return;
    }

    log::info!("Scale notation WASM module initialized");
}
