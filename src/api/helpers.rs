//! Shared helpers for WASM API operations
//!
//! Common patterns for serialization, deserialization and error handling
//! across the exported functions.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::PlacementError;

// ============================================================================
// Error Conversion
// ============================================================================

/// Log a placement error and convert it for JS
pub fn js_error(err: PlacementError) -> JsValue {
    let msg = err.to_string();
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| js_error(PlacementError::Deserialize(format!("{}: {}", error_context, e))))
}

/// Like `deserialize`, but `undefined` and `null` mean the default value
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        Ok(T::default())
    } else {
        deserialize(value, error_context)
    }
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}
