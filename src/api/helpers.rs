//! Shared helpers for WASM API operations
//!
//! Serialization and error conversion used by every exported function.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::errors::NotationError;

/// Log a notation error and convert it for JavaScript
pub fn js_error(context: &str, err: NotationError) -> JsValue {
    let msg = format!("{}: {}", context, err);
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}
