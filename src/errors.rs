//! Error types for the notation engine
//!
//! Every failure is local and happens at construction time: parsing a note or
//! pattern, looking up a clef, or addressing a staff glyph. Nothing is retried.
//! `BadSizedScaleJump` and `NoteNotInKeySignature` are caller contract
//! violations rather than user input errors.

use thiserror::Error;

use crate::models::letter::Letter;

/// Top-level error type for the notation engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// Note literal does not start with A-G
    #[error("Invalid note letter in '{0}' (expected A-G)")]
    InvalidNoteLetter(String),

    /// Note literal does not end with a decimal digit
    #[error("Invalid octave in '{0}' (expected a trailing digit)")]
    InvalidOctave(String),

    /// Something other than '#' or 'b' between letter and octave
    #[error("Invalid accidental '{symbol}' in '{note}'")]
    InvalidAccidental { note: String, symbol: char },

    /// Pattern half steps do not add up to one octave
    #[error("Invalid scale size for pattern '{pattern}': {half_steps} half steps (expected 12)")]
    InvalidScaleSize { pattern: String, half_steps: u32 },

    /// Pattern character outside W/H/3
    #[error("Invalid step '{0}' in scale pattern (expected W, H or 3)")]
    InvalidPatternStep(char),

    /// Transposition by something other than 1-3 half steps
    #[error("Bad sized scale jump: {0} half steps (expected 1-3)")]
    BadSizedScaleJump(i32),

    /// Mismatch queried for a letter the key signature does not govern
    #[error("Note letter {0} is not in the key signature")]
    NoteNotInKeySignature(Letter),

    #[error("Invalid key signature: {0}")]
    InvalidKeySignature(String),

    #[error("Unknown clef: '{0}'")]
    UnknownClef(String),

    #[error("Unknown scale type: '{0}'")]
    UnknownScaleType(String),

    /// Note sits outside the range the staff font can draw
    #[error("Staff offset {offset} for {note} is outside 1..={max}")]
    StaffOffsetOutOfRange { note: String, offset: i32, max: i32 },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NotationError>;
