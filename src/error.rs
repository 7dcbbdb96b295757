// src/error.rs
use thiserror::Error;
use ticklist_core::CheckboxError;

/// Errors surfaced by the operator CLI.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Checkbox state error: {0}")]
    State(#[from] CheckboxError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid export file: {0}")]
    InvalidExport(#[from] serde_json::Error),

    #[error("Import failed; some records may already have been written")]
    ImportFailed,
}
