//! Defines the error types for store and configuration operations.

use thiserror::Error;
use ticklist_traits::StorageError;

/// The main error enum for fallible operations inside the engine.
///
/// Most public operations recover from these locally (logging a warning);
/// the `try_*` variants surface them for callers that want to react.
#[derive(Error, Debug)]
pub enum CheckboxError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}
