//! Renderers module
//!
//! Converts structured staff glyphs into staff-font text. Only this module
//! knows the font's codepoint layout.

pub mod font_utils;
pub mod staff;

// Re-export commonly used functions
pub use font_utils::{codepoint_for, glyph_from_char};
pub use staff::{render_key_signature, render_note, render_scale, render_sequence};
