//! Scale generation
//!
//! A `Scale` is a pure value: pattern, starting note, clef and key signature.
//! The note sequence and both renderings are recomputed on demand, so a
//! rendering can never go stale relative to the notes it was built from.

use serde::{Deserialize, Serialize};

use super::clef::{Clef, ClefKind};
use super::key_signature::KeySignature;
use super::note::{Note, DIATONIC_LENGTH};
use super::scale_pattern::ScalePattern;
use super::staff_glyph::StaffGlyph;
use crate::errors::Result;
use crate::renderers::staff;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    pub pattern: ScalePattern,
    pub starting_note: Note,
    pub clef: ClefKind,
    pub key_signature: KeySignature,
}

impl Scale {
    /// Build a scale from its textual parts
    ///
    /// # Examples
    /// ```
    /// use scales_wasm::models::{KeySignature, Scale};
    ///
    /// let scale = Scale::new("WWHWWWH", "C4", "treble", KeySignature::open()).unwrap();
    /// assert_eq!(scale.render_plain(), "C D E F G A B C");
    /// ```
    pub fn new(
        pattern: &str,
        starting_note: &str,
        clef: &str,
        key_signature: KeySignature,
    ) -> Result<Self> {
        let pattern = ScalePattern::parse(pattern)?;
        let starting_note = Note::parse(starting_note)?;
        let clef = Clef::by_name(clef)?.kind;

        Ok(Self::from_parts(pattern, starting_note, clef, key_signature))
    }

    pub fn from_parts(
        pattern: ScalePattern,
        starting_note: Note,
        clef: ClefKind,
        key_signature: KeySignature,
    ) -> Self {
        Self {
            pattern,
            starting_note,
            clef,
            key_signature,
        }
    }

    pub fn clef(&self) -> &'static Clef {
        self.clef.clef()
    }

    /// Starting note followed by one note per pattern step
    ///
    /// The last step closes the octave, so the result has `pattern.len() + 1`
    /// notes.
    pub fn generate_sequence(&self) -> Vec<Note> {
        let scale_length = self.pattern.len();
        if scale_length != DIATONIC_LENGTH {
            // TODO: letter-stepping rules for 5/6/8/12-note scales; until then only accidentals move
            log::warn!(
                "Scale {} has {} steps; spelling keeps the letter {} and only accumulates accidentals",
                self.pattern,
                scale_length,
                self.starting_note.letter
            );
        }

        let mut notes = Vec::with_capacity(scale_length + 1);
        let mut current = self.starting_note;
        notes.push(current);
        for step in self.pattern.steps() {
            current = current.up_by_step(*step, scale_length);
            notes.push(current);
        }

        log::debug!(
            "Generated {} from {}: {:?}",
            self.pattern,
            self.starting_note,
            notes.iter().map(Note::to_string).collect::<Vec<_>>()
        );
        notes
    }

    /// Space-separated note names without octaves, e.g. `"C D E F G A B C"`
    pub fn render_plain(&self) -> String {
        Self::plain_names(&self.generate_sequence())
    }

    /// `render_plain` for a sequence that has already been generated
    pub fn plain_names(notes: &[Note]) -> String {
        notes.iter().map(Note::plain).collect::<Vec<_>>().join(" ")
    }

    /// Staff glyphs for each generated note, in order
    pub fn staff_glyphs(&self) -> Vec<Vec<StaffGlyph>> {
        self.staff_glyphs_for(&self.generate_sequence())
    }

    /// Staff glyphs for `notes` under this scale's clef and key signature
    pub fn staff_glyphs_for(&self, notes: &[Note]) -> Vec<Vec<StaffGlyph>> {
        let clef = self.clef();
        notes
            .iter()
            .map(|note| note.staff_glyphs(clef, &self.key_signature))
            .collect()
    }

    /// Clef symbol followed by every note's glyphs, as staff-font text
    pub fn render_staff(&self) -> Result<String> {
        staff::render_scale(self, false)
    }

    /// Like `render_staff`, with the key signature written after the clef
    pub fn render_staff_with_signature(&self) -> Result<String> {
        staff::render_scale(self, true)
    }

    pub fn half_steps(&self) -> Vec<u8> {
        self.pattern.half_steps()
    }

    /// Exact comparison against a guessed pattern
    pub fn matches_pattern(&self, pattern: &ScalePattern) -> bool {
        self.pattern == *pattern
    }
}
