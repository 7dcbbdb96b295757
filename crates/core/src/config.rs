//! Plugin configuration.

use crate::error::CheckboxError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_STORAGE_PREFIX: &str = "docsify-checkbox-";
pub const DEFAULT_FADE_OPACITY: f64 = 0.6;

/// Options read once when the plugin is created.
///
/// Deserializes from the host's camelCase object; every key is optional.
///
/// ```ignore
/// let config = Config::from_json(r#"{ "storagePrefix": "notes-", "fadeCompleted": false }"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub storage_prefix: String,
    pub strikethrough_completed: bool,
    pub fade_completed: bool,
    /// Opacity for completed entries, in `0.0..=1.0`.
    pub fade_opacity: f64,
    pub clean_orphaned_states: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_prefix: DEFAULT_STORAGE_PREFIX.to_string(),
            strikethrough_completed: true,
            fade_completed: true,
            fade_opacity: DEFAULT_FADE_OPACITY,
            clean_orphaned_states: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Default::default()
    }

    /// Parses a JSON object, filling missing keys with defaults.
    pub fn from_json(json: &str) -> Result<Self, CheckboxError> {
        let config: Config = serde_json::from_str(json)?;
        Ok(config.validated())
    }

    /// Same as [`from_json`](Self::from_json) for an already-parsed value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CheckboxError> {
        let config: Config = serde_json::from_value(value)?;
        Ok(config.validated())
    }

    /// Merges a host options object over the defaults one key at a time.
    ///
    /// A key holding the wrong type is logged and keeps its default while
    /// the remaining keys still apply. Only a non-object is an error.
    pub fn from_options(options: &serde_json::Value) -> Result<Self, CheckboxError> {
        let serde_json::Value::Object(options) = options else {
            return Err(CheckboxError::Config(format!(
                "options must be an object, got {}",
                options
            )));
        };
        let mut config = Config::default();
        for (key, value) in options {
            if let Err(e) = config.apply(key, value) {
                log::warn!("Ignoring checkbox option '{}': {}", key, e);
            }
        }
        Ok(config.validated())
    }

    fn apply(&mut self, key: &str, value: &serde_json::Value) -> Result<(), serde_json::Error> {
        match key {
            "storagePrefix" => self.storage_prefix = String::deserialize(value)?,
            "strikethroughCompleted" => self.strikethrough_completed = bool::deserialize(value)?,
            "fadeCompleted" => self.fade_completed = bool::deserialize(value)?,
            "fadeOpacity" => self.fade_opacity = f64::deserialize(value)?,
            "cleanOrphanedStates" => self.clean_orphaned_states = bool::deserialize(value)?,
            _ => {}
        }
        Ok(())
    }

    pub fn with_storage_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.storage_prefix = prefix.into();
        self
    }

    pub fn with_strikethrough(mut self, enabled: bool) -> Self {
        self.strikethrough_completed = enabled;
        self
    }

    pub fn with_fade(mut self, enabled: bool) -> Self {
        self.fade_completed = enabled;
        self
    }

    pub fn with_fade_opacity(mut self, opacity: f64) -> Self {
        self.fade_opacity = opacity;
        self.validated()
    }

    pub fn with_orphan_cleanup(mut self, enabled: bool) -> Self {
        self.clean_orphaned_states = enabled;
        self
    }

    /// Reports the first invalid option, if any.
    pub fn check(&self) -> Result<(), CheckboxError> {
        if !self.fade_opacity.is_finite() {
            return Err(CheckboxError::Config(format!(
                "fadeOpacity must be a finite number, got {}",
                self.fade_opacity
            )));
        }
        if !(0.0..=1.0).contains(&self.fade_opacity) {
            return Err(CheckboxError::Config(format!(
                "fadeOpacity must be between 0 and 1, got {}",
                self.fade_opacity
            )));
        }
        Ok(())
    }

    /// Repairs invalid options: non-finite opacity falls back to the default,
    /// out-of-range opacity is clamped.
    pub fn validated(mut self) -> Self {
        if let Err(e) = self.check() {
            log::warn!("{}; adjusting", e);
            self.fade_opacity = if self.fade_opacity.is_finite() {
                self.fade_opacity.clamp(0.0, 1.0)
            } else {
                DEFAULT_FADE_OPACITY
            };
        }
        self
    }

    /// The opacity as a CSS value.
    pub fn opacity_css(&self) -> String {
        self.fade_opacity.to_string()
    }
}
