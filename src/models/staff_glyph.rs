//! Structured staff symbols
//!
//! The engine describes what to draw as a `(band, offset)` pair. Turning that
//! pair into a font codepoint is the renderer's job (see
//! `renderers::font_utils`), so nothing in `models` knows codepoint values.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Glyph family. Discriminants are the band order in the staff font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum GlyphBand {
    Notehead = 0,
    Flat = 1,
    Natural = 2,
    Sharp = 3,
}

impl GlyphBand {
    pub const ALL: [GlyphBand; 4] = [
        GlyphBand::Notehead,
        GlyphBand::Flat,
        GlyphBand::Natural,
        GlyphBand::Sharp,
    ];

    /// Band used to draw an accidental of the given sign
    pub fn for_accidental(accidental: i32) -> GlyphBand {
        match accidental.signum() {
            1 => GlyphBand::Sharp,
            -1 => GlyphBand::Flat,
            _ => GlyphBand::Natural,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GlyphBand::Notehead => "notehead",
            GlyphBand::Flat => "flat",
            GlyphBand::Natural => "natural",
            GlyphBand::Sharp => "sharp",
        }
    }
}

/// One symbol at a vertical staff position (1 = the clef's lowest note)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaffGlyph {
    pub band: GlyphBand,
    pub offset: i32,
}

impl StaffGlyph {
    pub fn new(band: GlyphBand, offset: i32) -> Self {
        Self { band, offset }
    }

    pub fn notehead(offset: i32) -> Self {
        Self::new(GlyphBand::Notehead, offset)
    }
}
