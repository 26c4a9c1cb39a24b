//! Concrete pitches and scale-step transposition
//!
//! A `Note` is a letter, a signed accidental count (sharps positive, flats
//! negative) and an octave number that increments at C. Notes are immutable
//! values: transposition returns a new note.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::clef::Clef;
use super::key_signature::KeySignature;
use super::letter::Letter;
use super::scale_pattern::Step;
use super::staff_glyph::{GlyphBand, StaffGlyph};
use crate::errors::{NotationError, Result};

pub const SHARP: char = '#';
pub const FLAT: char = 'b';

/// Scale length for which transposition walks through every letter
pub const DIATONIC_LENGTH: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub letter: Letter,
    pub accidental: i32,
    pub octave: i8,
}

impl Note {
    pub const fn new(letter: Letter, accidental: i32, octave: i8) -> Self {
        Self {
            letter,
            accidental,
            octave,
        }
    }

    pub const fn natural(letter: Letter, octave: i8) -> Self {
        Self::new(letter, 0, octave)
    }

    /// Parse a compact note literal such as `"Ab4"`, `"C#4"` or `"F4"`
    ///
    /// The first character is the letter (A-G, case-sensitive), the last is a
    /// single octave digit, and everything between is accidentals. Sharps and
    /// flats may be mixed; the net count is kept. Only octaves 0-9 can be
    /// parsed.
    pub fn parse(s: &str) -> Result<Note> {
        let mut chars = s.chars();

        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| NotationError::InvalidNoteLetter(s.to_string()))?;

        let octave = chars
            .next_back()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(|| NotationError::InvalidOctave(s.to_string()))? as i8;

        let mut accidental = 0;
        for symbol in chars {
            match symbol {
                SHARP => accidental += 1,
                FLAT => accidental -= 1,
                _ => {
                    return Err(NotationError::InvalidAccidental {
                        note: s.to_string(),
                        symbol,
                    })
                }
            }
        }

        Ok(Note::new(letter, accidental, octave))
    }

    /// Accidental symbols: `n` sharps, `n` flats, or nothing
    pub fn accidental_symbols(&self) -> String {
        let symbol = if self.accidental > 0 { SHARP } else { FLAT };
        std::iter::repeat(symbol)
            .take(self.accidental.unsigned_abs() as usize)
            .collect()
    }

    /// Letter and accidentals without the octave, e.g. `"Bb"`
    pub fn plain(&self) -> String {
        format!("{}{}", self.letter, self.accidental_symbols())
    }

    /// The note `half_steps` (1-3) above this one
    ///
    /// For diatonic scales (`scale_length == 7`) the letter always advances by
    /// one and the accidental absorbs the difference, so every letter is used
    /// once. Other scale lengths keep the letter and octave and only
    /// accumulate accidentals.
    pub fn up_by(&self, half_steps: i32, scale_length: usize) -> Result<Note> {
        if !(1..=3).contains(&half_steps) {
            return Err(NotationError::BadSizedScaleJump(half_steps));
        }
        Ok(self.transpose(half_steps, scale_length))
    }

    /// Same as `up_by` for a step already known to be in range
    pub fn up_by_step(&self, step: Step, scale_length: usize) -> Note {
        self.transpose(step.half_steps() as i32, scale_length)
    }

    fn transpose(&self, half_steps: i32, scale_length: usize) -> Note {
        let accidental = self.accidental + half_steps;

        if scale_length != DIATONIC_LENGTH {
            return Note::new(self.letter, accidental, self.octave);
        }

        // B-C and E-F are a half step apart; every other letter pair a whole step
        let letter_gap = if self.letter.half_step_to_next() { 1 } else { 2 };
        let octave = if self.letter == Letter::B {
            self.octave.saturating_add(1)
        } else {
            self.octave
        };

        Note::new(self.letter.next(), accidental - letter_gap, octave)
    }

    /// Glyphs for this note's accidentals, all at the note's staff offset
    ///
    /// A natural note yields a single natural sign when `with_natural` is set
    /// and nothing otherwise.
    pub fn accidental_glyphs(&self, clef: &Clef, with_natural: bool) -> Vec<StaffGlyph> {
        let offset = clef.font_offset_number(self);

        if self.accidental == 0 {
            return if with_natural {
                vec![StaffGlyph::new(GlyphBand::Natural, offset)]
            } else {
                Vec::new()
            };
        }

        let band = GlyphBand::for_accidental(self.accidental);
        vec![StaffGlyph::new(band, offset); self.accidental.unsigned_abs() as usize]
    }

    /// Accidentals (if any must be shown) followed by the notehead
    ///
    /// Letters governed by the key signature only show an accidental when
    /// the note disagrees with the signature. Other letters always show their
    /// accidentals but never a natural.
    pub fn staff_glyphs(&self, clef: &Clef, key_signature: &KeySignature) -> Vec<StaffGlyph> {
        let mut glyphs = if key_signature.contains(self) {
            if key_signature.sign_differs(self) {
                self.accidental_glyphs(clef, true)
            } else {
                Vec::new()
            }
        } else {
            self.accidental_glyphs(clef, false)
        };

        glyphs.push(StaffGlyph::notehead(clef.font_offset_number(self)));
        glyphs
    }
}

/// Prints the literal `parse` reads back, for octaves 0-9
///
/// Transposing past octave 9 (e.g. up from `B9`) prints a two-digit octave
/// that `parse` rejects.
impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.letter, self.accidental_symbols(), self.octave)
    }
}

impl FromStr for Note {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self> {
        Note::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(s: &str) -> Note {
        Note::parse(s).unwrap()
    }

    #[test]
    fn test_parse_naturals_and_accidentals() {
        assert_eq!(note("F4"), Note::new(Letter::F, 0, 4));
        assert_eq!(note("C#4"), Note::new(Letter::C, 1, 4));
        assert_eq!(note("Ab4"), Note::new(Letter::A, -1, 4));
        assert_eq!(note("G##2"), Note::new(Letter::G, 2, 2));
        assert_eq!(note("Ebb0"), Note::new(Letter::E, -2, 0));
    }

    #[test]
    fn test_parse_mixed_accidentals_are_summed() {
        assert_eq!(note("C#b#5").accidental, 1);
        assert_eq!(note("Db#3").accidental, 0);
    }

    #[test]
    fn test_parse_invalid_letter() {
        assert_eq!(
            Note::parse("H4"),
            Err(NotationError::InvalidNoteLetter("H4".to_string()))
        );
        assert!(matches!(Note::parse("c4"), Err(NotationError::InvalidNoteLetter(_))));
        assert!(matches!(Note::parse(""), Err(NotationError::InvalidNoteLetter(_))));
    }

    #[test]
    fn test_parse_invalid_octave() {
        assert_eq!(
            Note::parse("C#"),
            Err(NotationError::InvalidOctave("C#".to_string()))
        );
        assert!(matches!(Note::parse("C"), Err(NotationError::InvalidOctave(_))));
    }

    #[test]
    fn test_parse_invalid_accidental() {
        assert_eq!(
            Note::parse("Cx4"),
            Err(NotationError::InvalidAccidental {
                note: "Cx4".to_string(),
                symbol: 'x'
            })
        );
    }

    #[test]
    fn test_display_and_plain() {
        assert_eq!(note("Ab4").to_string(), "Ab4");
        assert_eq!(note("F##3").to_string(), "F##3");
        assert_eq!(note("Ab4").plain(), "Ab");
        assert_eq!(note("C4").plain(), "C");
    }

    #[test]
    fn test_roundtrip() {
        for literal in ["C4", "Ab4", "F#3", "Bbb1", "E###9", "G0"] {
            let n = note(literal);
            assert_eq!(Note::parse(&n.to_string()), Ok(n), "round trip of {}", literal);
        }
    }

    #[test]
    fn test_up_by_diatonic_whole_and_half_steps() {
        assert_eq!(note("C4").up_by(2, 7).unwrap(), note("D4"));
        assert_eq!(note("E4").up_by(1, 7).unwrap(), note("F4"));
        assert_eq!(note("E4").up_by(2, 7).unwrap(), note("F#4"));
        assert_eq!(note("D4").up_by(1, 7).unwrap(), note("Eb4"));
        assert_eq!(note("F4").up_by(3, 7).unwrap(), note("G#4"));
    }

    #[test]
    fn test_up_by_octave_rolls_over_at_b() {
        assert_eq!(note("B3").up_by(1, 7).unwrap(), note("C4"));
        assert_eq!(note("Bb3").up_by(2, 7).unwrap(), note("C4"));
        assert_eq!(note("G3").up_by(2, 7).unwrap(), note("A3"));
        assert_eq!(note("A3").up_by(2, 7).unwrap(), note("B3"));
    }

    #[test]
    fn test_octave_ten_prints_but_does_not_parse() {
        let c10 = note("B9").up_by(1, 7).unwrap();
        assert_eq!(c10, Note::new(Letter::C, 0, 10));
        assert_eq!(c10.to_string(), "C10");
        assert!(Note::parse(&c10.to_string()).is_err());

        let c9 = note("B8").up_by(1, 7).unwrap();
        assert_eq!(Note::parse(&c9.to_string()), Ok(c9));
    }

    #[test]
    fn test_up_by_non_diatonic_keeps_letter() {
        assert_eq!(note("C4").up_by(2, 6).unwrap(), note("C##4"));
        assert_eq!(note("C4").up_by(1, 12).unwrap(), note("C#4"));
        assert_eq!(note("B4").up_by(3, 5).unwrap(), note("B###4"));
    }

    #[test]
    fn test_up_by_rejects_bad_jumps() {
        assert_eq!(note("C4").up_by(0, 7), Err(NotationError::BadSizedScaleJump(0)));
        assert_eq!(note("C4").up_by(4, 7), Err(NotationError::BadSizedScaleJump(4)));
        assert_eq!(note("C4").up_by(-1, 7), Err(NotationError::BadSizedScaleJump(-1)));
    }

    #[test]
    fn test_up_by_step_matches_up_by() {
        let start = note("Eb4");
        for step in [Step::Half, Step::Whole, Step::AugmentedSecond] {
            assert_eq!(
                start.up_by_step(step, 7),
                start.up_by(step.half_steps() as i32, 7).unwrap()
            );
        }
    }
}
