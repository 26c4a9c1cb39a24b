//! Models module for the scale notation engine
//!
//! Pitch primitives, key signatures, clefs and scales. Everything here is an
//! immutable value; rendering to font codepoints lives in `renderers`.

pub mod letter;
pub mod note;
pub mod key_signature;
pub mod clef;
pub mod staff_glyph;
pub mod scale_pattern;
pub mod scale;
pub mod scale_types;

// Re-export commonly used types
pub use letter::Letter;
pub use note::Note;
pub use key_signature::KeySignature;
pub use clef::{Clef, ClefKind};
pub use staff_glyph::{GlyphBand, StaffGlyph};
pub use scale_pattern::{ScalePattern, Step};
pub use scale::Scale;
pub use scale_types::ScaleType;
