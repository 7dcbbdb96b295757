//! Error handling for WASM bindings.
//!
//! Converts ticklist's error types into JavaScript-friendly errors.

use thiserror::Error;
use ticklist_core::CheckboxError;
use ticklist_traits::StorageError;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid plugin configuration
    Config,
    /// Storage unavailable or a read/write failed
    Storage,
    /// JSON or JS value conversion error
    Json,
    /// Missing window/document, or a DOM call threw
    Dom,
}

impl ErrorCode {
    fn as_js_code(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Storage => "STORAGE_ERROR",
            ErrorCode::Json => "JSON_ERROR",
            ErrorCode::Dom => "DOM_ERROR",
        }
    }
}

/// A JavaScript-friendly error type.
///
/// Converted into a JS `Error` carrying a `code` property.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TicklistError {
    code: ErrorCode,
    message: String,
}

impl TicklistError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn dom(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Dom, message)
    }

    pub fn json(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Json, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<CheckboxError> for TicklistError {
    fn from(err: CheckboxError) -> Self {
        let code = match &err {
            CheckboxError::Storage(_) => ErrorCode::Storage,
            CheckboxError::Json(_) => ErrorCode::Json,
            CheckboxError::Config(_) => ErrorCode::Config,
        };
        Self::new(code, err.to_string())
    }
}

impl From<StorageError> for TicklistError {
    fn from(err: StorageError) -> Self {
        Self::new(ErrorCode::Storage, err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for TicklistError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::json(err.to_string())
    }
}

impl From<JsValue> for TicklistError {
    fn from(value: JsValue) -> Self {
        Self::dom(js_message(&value))
    }
}

impl From<TicklistError> for JsValue {
    fn from(err: TicklistError) -> Self {
        let js_error = js_sys::Error::new(&err.message);
        js_sys::Reflect::set(
            &js_error,
            &"code".into(),
            &JsValue::from_str(err.code.as_js_code()),
        )
        .ok();
        js_error.into()
    }
}

/// Best-effort text of a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
