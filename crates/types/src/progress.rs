//! Aggregate progress and the per-toggle change notification payload.

use crate::ids::Identity;
use serde::Serialize;

/// Checked/total counts for the checkboxes currently in the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub total: usize,
    pub checked: usize,
    /// `round(checked / total * 100)`, or 0 for an empty document.
    pub percentage: u32,
}

impl Progress {
    pub fn from_counts(total: usize, checked: usize) -> Self {
        let percentage = if total > 0 {
            (checked as f64 / total as f64 * 100.0).round() as u32
        } else {
            0
        };
        Self {
            total,
            checked,
            percentage,
        }
    }
}

/// Emitted after every user toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    pub identity: Identity,
    pub checked: bool,
    pub page_path: String,
    pub progress: Progress,
}
