//! Clefs and vertical staff placement
//!
//! Each clef is a fixed reference point: its lowest displayable note sits at
//! staff position 1 and every other note is counted in diatonic steps above
//! it. Both clefs put their bottom staff line at position 6, which leaves
//! room for two ledger lines below.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::key_signature::KeySignature;
use super::letter::Letter;
use super::note::Note;
use super::staff_glyph::{GlyphBand, StaffGlyph};
use crate::errors::{NotationError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClefKind {
    #[default]
    Treble,
    Bass,
}

impl ClefKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClefKind::Treble => "treble",
            ClefKind::Bass => "bass",
        }
    }

    pub fn clef(&self) -> &'static Clef {
        match self {
            ClefKind::Treble => &TREBLE,
            ClefKind::Bass => &BASS,
        }
    }
}

impl fmt::Display for ClefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClefKind {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self> {
        Clef::by_name(s).map(|clef| clef.kind)
    }
}

/// A clef definition
///
/// `sharp_order` and `flat_order` are the staff positions at which the
/// key-signature accidentals are written, in the order they are added.
#[derive(Debug, PartialEq, Eq)]
pub struct Clef {
    pub kind: ClefKind,
    pub name: &'static str,
    pub symbol: char,
    pub lowest_note: Note,
    pub sharp_order: [Note; 7],
    pub flat_order: [Note; 7],
}

pub static TREBLE: Clef = Clef {
    kind: ClefKind::Treble,
    name: "treble",
    symbol: '\u{1D11E}',
    lowest_note: Note::natural(Letter::G, 3),
    sharp_order: [
        Note::natural(Letter::F, 5),
        Note::natural(Letter::C, 5),
        Note::natural(Letter::G, 5),
        Note::natural(Letter::D, 5),
        Note::natural(Letter::A, 4),
        Note::natural(Letter::E, 5),
        Note::natural(Letter::B, 4),
    ],
    flat_order: [
        Note::natural(Letter::B, 4),
        Note::natural(Letter::E, 5),
        Note::natural(Letter::A, 4),
        Note::natural(Letter::D, 5),
        Note::natural(Letter::G, 4),
        Note::natural(Letter::C, 5),
        Note::natural(Letter::F, 4),
    ],
};

pub static BASS: Clef = Clef {
    kind: ClefKind::Bass,
    name: "bass",
    symbol: '\u{1D122}',
    lowest_note: Note::natural(Letter::B, 1),
    sharp_order: [
        Note::natural(Letter::F, 3),
        Note::natural(Letter::C, 3),
        Note::natural(Letter::G, 3),
        Note::natural(Letter::D, 3),
        Note::natural(Letter::A, 2),
        Note::natural(Letter::E, 3),
        Note::natural(Letter::B, 2),
    ],
    flat_order: [
        Note::natural(Letter::B, 2),
        Note::natural(Letter::E, 3),
        Note::natural(Letter::A, 2),
        Note::natural(Letter::D, 3),
        Note::natural(Letter::G, 2),
        Note::natural(Letter::C, 3),
        Note::natural(Letter::F, 2),
    ],
};

lazy_static! {
    static ref CLEF_REGISTRY: HashMap<&'static str, &'static Clef> = {
        let mut registry = HashMap::new();
        for clef in [&TREBLE, &BASS] {
            registry.insert(clef.name, clef);
        }
        registry
    };
}

/// Diatonic steps above C0
fn staff_step(note: &Note) -> i32 {
    note.octave as i32 * 7 + note.letter.staff_index()
}

impl Clef {
    pub fn by_name(name: &str) -> Result<&'static Clef> {
        CLEF_REGISTRY
            .get(name)
            .copied()
            .ok_or_else(|| NotationError::UnknownClef(name.to_string()))
    }

    pub fn all() -> [&'static Clef; 2] {
        [&TREBLE, &BASS]
    }

    /// Staff position of `note`, with this clef's lowest note at 1
    ///
    /// Accidentals do not move a note vertically. Octave numbers change at C,
    /// so letters are counted from C when combining letter and octave.
    pub fn font_offset_number(&self, note: &Note) -> i32 {
        staff_step(note) - staff_step(&self.lowest_note) + 1
    }

    /// One sharp or flat per governed letter, at this clef's insertion positions
    pub fn key_signature_glyphs(&self, key_signature: &KeySignature) -> Vec<StaffGlyph> {
        let count = key_signature.sharps_flats().unsigned_abs() as usize;
        let (positions, band) = if key_signature.sharps_flats() >= 0 {
            (&self.sharp_order, GlyphBand::Sharp)
        } else {
            (&self.flat_order, GlyphBand::Flat)
        };

        positions[..count]
            .iter()
            .map(|note| StaffGlyph::new(band, self.font_offset_number(note)))
            .collect()
    }
}
