//! Scale engine WASM API
//!
//! JavaScript-facing entry points. Each function builds its values from the
//! arguments it is given; no state is kept between calls.
//!
//! # Module Structure
//!
//! - `helpers`: error conversion and serialization shared by all exports
//! - `scales`: scale construction, rendering and pattern identification

pub mod helpers;
pub mod scales;

pub use scales::{
    generate_scale, generate_scale_from_type, identify_scale_pattern, list_scale_types,
    render_scale_plain, render_scale_staff, ScaleView,
};
