//! Scale types the game deals from
//!
//! Each type is bound to the key the player presses to guess it, and lists
//! the starting notes it may be dealt on. The table is written as literals
//! and resolved into typed patterns and notes once, on first use.

use lazy_static::lazy_static;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

use super::clef::ClefKind;
use super::key_signature::KeySignature;
use super::note::Note;
use super::scale::Scale;
use super::scale_pattern::ScalePattern;
use crate::errors::{NotationError, Result};

/// One row of the literal table
struct ScaleTypeEntry {
    key: char,
    name: &'static str,
    pattern: &'static str,
    possible_starts: &'static [&'static str],
}

impl ScaleTypeEntry {
    fn resolve(&self) -> Result<ScaleType> {
        Ok(ScaleType {
            key: self.key,
            name: self.name,
            pattern: ScalePattern::parse(self.pattern)?,
            possible_starts: self
                .possible_starts
                .iter()
                .map(|s| Note::parse(s))
                .collect::<Result<_>>()?,
        })
    }
}

static ENTRIES: [ScaleTypeEntry; 8] = [
    ScaleTypeEntry {
        key: '1',
        name: "Major",
        pattern: "WWHWWWH",
        possible_starts: &["C4", "G3", "D4", "A3", "E4", "F4", "Bb3", "Eb4"],
    },
    ScaleTypeEntry {
        key: '2',
        name: "Natural Minor",
        pattern: "WHWWHWW",
        possible_starts: &["A3", "E4", "D4", "G3", "C4"],
    },
    ScaleTypeEntry {
        key: '3',
        name: "Harmonic Minor",
        pattern: "WHWWH3H",
        possible_starts: &["A3", "D4", "E4"],
    },
    ScaleTypeEntry {
        key: '4',
        name: "Melodic Minor",
        pattern: "WHWWWWH",
        possible_starts: &["A3", "D4", "E4"],
    },
    ScaleTypeEntry {
        key: '5',
        name: "Major Pentatonic",
        pattern: "WW3W3",
        possible_starts: &["C4", "G3", "F4"],
    },
    ScaleTypeEntry {
        key: '6',
        name: "Whole Tone",
        pattern: "WWWWWW",
        possible_starts: &["C4", "D4"],
    },
    ScaleTypeEntry {
        key: '7',
        name: "Octatonic",
        pattern: "WHWHWHWH",
        possible_starts: &["C4"],
    },
    ScaleTypeEntry {
        key: '8',
        name: "Chromatic",
        pattern: "HHHHHHHHHHHH",
        possible_starts: &["C4"],
    },
];

fn serialize_notes<S: Serializer>(notes: &[Note], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(notes.iter().map(Note::to_string))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleType {
    pub key: char,
    pub name: &'static str,
    pub pattern: ScalePattern,
    #[serde(serialize_with = "serialize_notes")]
    pub possible_starts: Vec<Note>,
}

lazy_static! {
    static ref SCALE_TYPES: Vec<ScaleType> = ENTRIES
        .iter()
        .filter_map(|entry| match entry.resolve() {
            Ok(scale_type) => Some(scale_type),
            Err(e) => {
                log::error!("Dropping scale type {}: {}", entry.name, e);
                None
            }
        })
        .collect();
    static ref BY_KEY: HashMap<char, &'static ScaleType> =
        SCALE_TYPES.iter().map(|t| (t.key, t)).collect();
}

impl ScaleType {
    pub fn all() -> &'static [ScaleType] {
        &SCALE_TYPES
    }

    pub fn by_key(key: char) -> Result<&'static ScaleType> {
        BY_KEY
            .get(&key)
            .copied()
            .ok_or_else(|| NotationError::UnknownScaleType(key.to_string()))
    }

    /// Case-insensitive lookup by display name
    pub fn by_name(name: &str) -> Result<&'static ScaleType> {
        SCALE_TYPES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| NotationError::UnknownScaleType(name.to_string()))
    }

    /// The scale type whose pattern equals `pattern`, if any
    pub fn identify(pattern: &ScalePattern) -> Option<&'static ScaleType> {
        SCALE_TYPES.iter().find(|t| t.pattern == *pattern)
    }

    /// A scale of this type starting on `start`
    pub fn scale(&self, start: Note, clef: ClefKind, key_signature: KeySignature) -> Scale {
        Scale::from_parts(self.pattern.clone(), start, clef, key_signature)
    }
}
