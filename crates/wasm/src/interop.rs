//! Conversions between Rust values and plain JS objects.

use crate::error::TicklistError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

/// Serializes to a plain JS object (maps become objects, not `Map`s).
pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue, TicklistError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(value.serialize(&serializer)?)
}

pub fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, TicklistError> {
    Ok(serde_wasm_bindgen::from_value(value)?)
}
