//! Staff-font text assembly
//!
//! Joins clef symbols and staff glyphs into a string the host draws with the
//! staff font. Glyphs that fall outside the drawable range are an error, not
//! silently dropped.

use crate::errors::{NotationError, Result};
use crate::models::{Clef, KeySignature, Note, Scale, StaffGlyph};
use crate::renderers::font_utils::{codepoint_for, TOTAL_NOTES};

fn push_glyphs(out: &mut String, glyphs: &[StaffGlyph], context: &dyn Fn() -> String) -> Result<()> {
    for glyph in glyphs {
        let ch = codepoint_for(*glyph).ok_or_else(|| NotationError::StaffOffsetOutOfRange {
            note: context(),
            offset: glyph.offset,
            max: TOTAL_NOTES as i32,
        })?;
        out.push(ch);
    }
    Ok(())
}

/// Accidentals (as the key signature requires) and notehead for one note
pub fn render_note(note: &Note, clef: &Clef, key_signature: &KeySignature) -> Result<String> {
    let mut out = String::new();
    push_glyphs(&mut out, &note.staff_glyphs(clef, key_signature), &|| note.to_string())?;
    Ok(out)
}

/// The key signature's sharps or flats at the clef's insertion positions
pub fn render_key_signature(clef: &Clef, key_signature: &KeySignature) -> Result<String> {
    let mut out = String::new();
    push_glyphs(&mut out, &clef.key_signature_glyphs(key_signature), &|| {
        format!("key signature {}", key_signature.sharps_flats())
    })?;
    Ok(out)
}

/// Clef symbol, optionally the key signature, then every note of the scale
pub fn render_scale(scale: &Scale, with_signature: bool) -> Result<String> {
    render_sequence(scale, &scale.generate_sequence(), with_signature)
}

/// `render_scale` for notes already generated from `scale`
pub fn render_sequence(scale: &Scale, notes: &[Note], with_signature: bool) -> Result<String> {
    let clef = scale.clef();
    let mut out = String::new();
    out.push(clef.symbol);

    if with_signature {
        out.push_str(&render_key_signature(clef, &scale.key_signature)?);
    }

    for note in notes {
        out.push_str(&render_note(note, clef, &scale.key_signature)?);
    }
    Ok(out)
}
