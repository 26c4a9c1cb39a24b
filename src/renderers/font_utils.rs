//! Staff font codepoint mapping
//!
//! The staff font draws every notehead and accidental pre-positioned on a
//! five-line staff. Glyphs live in the Supplementary Private Use Area-A as
//! four contiguous bands, one per `GlyphBand`, in this order:
//!
//! | band     | first codepoint | last codepoint |
//! |----------|-----------------|----------------|
//! | notehead | U+F0001         | U+F0019        |
//! | flat     | U+F001A         | U+F0032        |
//! | natural  | U+F0033         | U+F004B        |
//! | sharp    | U+F004C         | U+F0064        |
//!
//! A glyph at staff offset `n` (1..=`TOTAL_NOTES`) in band `b` is
//! `STAFF_FONT_BASE + b * TOTAL_NOTES + n`. The mapping is bit-exact with the
//! font asset; this module is the only place that knows it.

use wasm_bindgen::prelude::*;

use crate::models::staff_glyph::{GlyphBand, StaffGlyph};

/// Start of the staff font range (Supplementary Private Use Area-A)
pub const STAFF_FONT_BASE: u32 = 0xF0000;

/// Number of vertical positions each band can draw
pub const TOTAL_NOTES: u32 = 25;

/// First codepoint of a band, minus one (offsets start at 1)
pub fn band_base(band: GlyphBand) -> u32 {
    STAFF_FONT_BASE + band as u32 * TOTAL_NOTES
}

/// Codepoint for a glyph, or `None` if its offset is off the drawable staff
///
/// # Examples
/// ```
/// use scales_wasm::models::{GlyphBand, StaffGlyph};
/// use scales_wasm::renderers::font_utils::codepoint_for;
///
/// assert_eq!(codepoint_for(StaffGlyph::notehead(1)), Some('\u{F0001}'));
/// assert_eq!(codepoint_for(StaffGlyph::new(GlyphBand::Sharp, 25)), Some('\u{F0064}'));
/// assert_eq!(codepoint_for(StaffGlyph::notehead(0)), None);
/// ```
pub fn codepoint_for(glyph: StaffGlyph) -> Option<char> {
    let offset = u32::try_from(glyph.offset).ok()?;
    if !(1..=TOTAL_NOTES).contains(&offset) {
        return None;
    }
    char::from_u32(band_base(glyph.band) + offset)
}

/// Reverse lookup: the glyph a staff-font character draws
pub fn glyph_from_char(ch: char) -> Option<StaffGlyph> {
    let relative = (ch as u32).checked_sub(STAFF_FONT_BASE + 1)?;
    let band = *GlyphBand::ALL.get((relative / TOTAL_NOTES) as usize)?;
    let offset = (relative % TOTAL_NOTES + 1) as i32;
    Some(StaffGlyph::new(band, offset))
}

/// Codepoint range of one band
#[derive(Debug, Clone, serde::Serialize)]
pub struct BandRange {
    pub band: GlyphBand,
    pub name: &'static str,
    pub first: u32,
    pub last: u32,
}

/// Codepoint layout of the whole staff font
#[derive(Debug, Clone, serde::Serialize)]
pub struct StaffFontLayout {
    pub base: u32,
    pub total_notes: u32,
    pub bands: Vec<BandRange>,
}

impl StaffFontLayout {
    pub fn current() -> Self {
        let bands = GlyphBand::ALL
            .iter()
            .map(|&band| BandRange {
                band,
                name: band.name(),
                first: band_base(band) + 1,
                last: band_base(band) + TOTAL_NOTES,
            })
            .collect();

        Self {
            base: STAFF_FONT_BASE,
            total_notes: TOTAL_NOTES,
            bands,
        }
    }

    /// Overlap and range errors; empty when the layout is consistent
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for range in &self.bands {
            if range.last - range.first + 1 != self.total_notes {
                errors.push(format!(
                    "Band '{}' is {} wide (expected {})",
                    range.name,
                    range.last - range.first + 1,
                    self.total_notes
                ));
            }
            if char::from_u32(range.last).is_none() {
                errors.push(format!("Band '{}' ends outside Unicode (0x{:X})", range.name, range.last));
            }
        }

        for i in 0..self.bands.len() {
            for j in (i + 1)..self.bands.len() {
                let (a, b) = (&self.bands[i], &self.bands[j]);
                if !(a.last < b.first || b.last < a.first) {
                    errors.push(format!(
                        "Overlap: '{}' (0x{:X}-0x{:X}) overlaps with '{}' (0x{:X}-0x{:X})",
                        a.name, a.first, a.last, b.name, b.first, b.last
                    ));
                }
            }
        }

        errors
    }
}

/// Export the staff font layout to JavaScript
///
/// The host uses this to check that its font asset matches the codepoints
/// this module emits.
#[wasm_bindgen(js_name = getStaffFontConfig)]
pub fn get_staff_font_config() -> JsValue {
    serde_wasm_bindgen::to_value(&StaffFontLayout::current()).unwrap_or(JsValue::NULL)
}
