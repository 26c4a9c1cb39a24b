//! Scale operations exposed to the JavaScript host
//!
//! The host owns position, movement and input; it asks this module for the
//! text to draw and for the raw pattern to compare against a guess.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::helpers::{js_error, serialize};
use crate::errors::{NotationError, Result as NotationResult};
use crate::models::{Clef, KeySignature, Note, Scale, ScalePattern, ScaleType, StaffGlyph};
use crate::renderers::staff;

/// Everything the host needs to draw and score one scale
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleView {
    pub pattern: Vec<u8>,
    pub notes: Vec<String>,
    pub plain: String,
    pub staff: String,
    pub glyphs: Vec<Vec<StaffGlyph>>,
    pub scale_type: Option<&'static str>,
}

impl ScaleView {
    pub fn from_scale(scale: &Scale, with_signature: bool) -> NotationResult<Self> {
        let notes = scale.generate_sequence();

        Ok(Self {
            pattern: scale.half_steps(),
            staff: staff::render_sequence(scale, &notes, with_signature)?,
            plain: Scale::plain_names(&notes),
            glyphs: scale.staff_glyphs_for(&notes),
            notes: notes.iter().map(Note::to_string).collect(),
            scale_type: ScaleType::identify(&scale.pattern).map(|t| t.name),
        })
    }
}

/// Build a scale from host-supplied strings and a signed key signature
pub fn build_scale(pattern: &str, start: &str, clef: &str, sharps_flats: i32) -> NotationResult<Scale> {
    Scale::new(pattern, start, clef, KeySignature::new(sharps_flats)?)
}

/// Build the `start_index`-th starting note of a table scale type
pub fn scale_from_type(
    key: char,
    start_index: usize,
    clef: &str,
    sharps_flats: i32,
) -> NotationResult<Scale> {
    let scale_type = ScaleType::by_key(key)?;
    let starts = &scale_type.possible_starts;
    let start = starts.get(start_index).copied().ok_or_else(|| {
        NotationError::UnknownScaleType(format!(
            "{} start #{} (has {})",
            scale_type.name,
            start_index,
            starts.len()
        ))
    })?;

    Ok(scale_type.scale(start, Clef::by_name(clef)?.kind, KeySignature::new(sharps_flats)?))
}

#[wasm_bindgen(js_name = renderScalePlain)]
pub fn render_scale_plain(pattern: &str, start: &str) -> Result<String, JsValue> {
    build_scale(pattern, start, "treble", 0)
        .map(|scale| scale.render_plain())
        .map_err(|e| js_error("renderScalePlain", e))
}

#[wasm_bindgen(js_name = renderScaleStaff)]
pub fn render_scale_staff(
    pattern: &str,
    start: &str,
    clef: &str,
    sharps_flats: i32,
    with_signature: bool,
) -> Result<String, JsValue> {
    let render = || -> NotationResult<String> {
        let scale = build_scale(pattern, start, clef, sharps_flats)?;
        if with_signature {
            scale.render_staff_with_signature()
        } else {
            scale.render_staff()
        }
    };
    render().map_err(|e| js_error("renderScaleStaff", e))
}

/// Serialized `ScaleView` for a pattern/start pair
#[wasm_bindgen(js_name = generateScale)]
pub fn generate_scale(
    pattern: &str,
    start: &str,
    clef: &str,
    sharps_flats: i32,
    with_signature: bool,
) -> Result<JsValue, JsValue> {
    let view = build_scale(pattern, start, clef, sharps_flats)
        .and_then(|scale| ScaleView::from_scale(&scale, with_signature))
        .map_err(|e| js_error("generateScale", e))?;
    serialize(&view, "generateScale")
}

/// Serialized `ScaleView` for one of the table's scale types
#[wasm_bindgen(js_name = generateScaleFromType)]
pub fn generate_scale_from_type(
    key: char,
    start_index: usize,
    clef: &str,
    sharps_flats: i32,
    with_signature: bool,
) -> Result<JsValue, JsValue> {
    let view = scale_from_type(key, start_index, clef, sharps_flats)
        .and_then(|scale| ScaleView::from_scale(&scale, with_signature))
        .map_err(|e| js_error("generateScaleFromType", e))?;
    serialize(&view, "generateScaleFromType")
}

/// Name of the scale type a guessed pattern string denotes, if any
#[wasm_bindgen(js_name = identifyScalePattern)]
pub fn identify_scale_pattern(pattern: &str) -> Result<Option<String>, JsValue> {
    let pattern = ScalePattern::parse(pattern).map_err(|e| js_error("identifyScalePattern", e))?;
    Ok(ScaleType::identify(&pattern).map(|t| t.name.to_string()))
}

#[wasm_bindgen(js_name = listScaleTypes)]
pub fn list_scale_types() -> Result<JsValue, JsValue> {
    serialize(&ScaleType::all(), "listScaleTypes")
}
