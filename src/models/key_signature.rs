//! Key signatures as a signed sharp/flat count
//!
//! Positive counts govern the first n letters of the sharp order
//! (F C G D A E B), negative counts the last n letters (B E A D G C F read
//! from the flat end). The governed set is always a prefix or a suffix of the
//! sharp order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::letter::{Letter, SHARP_ORDER};
use super::note::{Note, FLAT, SHARP};
use crate::errors::{NotationError, Result};

pub const MAX_ACCIDENTALS: i32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct KeySignature {
    sharps_flats: i32,
}

impl KeySignature {
    pub fn new(sharps_flats: i32) -> Result<Self> {
        if !(-MAX_ACCIDENTALS..=MAX_ACCIDENTALS).contains(&sharps_flats) {
            return Err(NotationError::InvalidKeySignature(format!(
                "{} (must be between -{} and {})",
                sharps_flats, MAX_ACCIDENTALS, MAX_ACCIDENTALS
            )));
        }
        Ok(Self { sharps_flats })
    }

    /// Signature with no sharps or flats
    pub const fn open() -> Self {
        Self { sharps_flats: 0 }
    }

    pub fn sharps_flats(&self) -> i32 {
        self.sharps_flats
    }

    /// Key signature of the major scale on `tonic`
    pub fn major_for(tonic: &Note) -> Result<Self> {
        Self::new(tonic.letter.fifths() + 7 * tonic.accidental)
    }

    /// Key signature of the natural minor scale on `tonic`
    pub fn minor_for(tonic: &Note) -> Result<Self> {
        Self::new(tonic.letter.fifths() + 7 * tonic.accidental - 3)
    }

    /// Letters this signature governs, in the order they are written
    pub fn letters(&self) -> Vec<Letter> {
        let count = self.sharps_flats.unsigned_abs() as usize;
        if self.sharps_flats >= 0 {
            SHARP_ORDER[..count].to_vec()
        } else {
            SHARP_ORDER.iter().rev().take(count).copied().collect()
        }
    }

    pub fn contains(&self, note: &Note) -> bool {
        self.contains_letter(note.letter)
    }

    pub fn contains_letter(&self, letter: Letter) -> bool {
        let position = letter.sharp_order_position() as i32;
        if self.sharps_flats >= 0 {
            position < self.sharps_flats
        } else {
            position >= MAX_ACCIDENTALS + self.sharps_flats
        }
    }

    /// Whether `note` needs an explicit accidental against this signature
    ///
    /// Only meaningful for letters the signature governs.
    pub fn accidental_mismatch(&self, note: &Note) -> Result<bool> {
        if !self.contains(note) {
            return Err(NotationError::NoteNotInKeySignature(note.letter));
        }
        Ok(self.sign_differs(note))
    }

    pub(crate) fn sign_differs(&self, note: &Note) -> bool {
        note.accidental.signum() != self.sharps_flats.signum()
    }
}

impl TryFrom<i32> for KeySignature {
    type Error = NotationError;

    fn try_from(value: i32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<KeySignature> for i32 {
    fn from(key_signature: KeySignature) -> i32 {
        key_signature.sharps_flats
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = if self.sharps_flats > 0 { SHARP } else { FLAT };
        for _ in 0..self.sharps_flats.unsigned_abs() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl FromStr for KeySignature {
    type Err = NotationError;

    /// Accepts a run of sharps (`"##"`), a run of flats (`"bbb"`), an empty
    /// string, or a signed count (`"-3"`)
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        if trimmed.chars().all(|c| c == SHARP) {
            return Self::new(trimmed.len() as i32);
        }
        if trimmed.chars().all(|c| c == FLAT) {
            return Self::new(-(trimmed.len() as i32));
        }

        trimmed
            .parse::<i32>()
            .map_err(|_| NotationError::InvalidKeySignature(s.to_string()))
            .and_then(Self::new)
    }
}
