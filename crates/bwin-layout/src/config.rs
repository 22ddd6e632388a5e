#![forbid(unsafe_code)]

//! Layout configuration as data.
//!
//! [`LayoutConfig`] carries every tunable the tree reads: the minimums and
//! resize strategy the root starts with (and split children inherit), the
//! drop-zone inset, the share an edge drop gives the dropped pane, and the
//! prefix of generated ids.
//!
//! # Loading
//!
//! ```toml
//! # bwin.toml
//! min_width = 160
//! resize_strategy = "natural"
//! zone_inset = 0.25
//! ```
//!
//! ```rust,ignore
//! let config = LayoutConfig::from_toml_file("bwin.toml")?;
//! let config = LayoutConfig::from_json_str(json)?;
//! ```
//!
//! Missing keys keep their defaults. Loaded configs are validated; an
//! out-of-range value surfaces as [`ConfigError::Validation`].

#[cfg(feature = "config")]
use std::path::Path;

use bwin_core::{ZoneClassifier, ZoneClassifierError};
use serde::{Deserialize, Serialize};

use crate::strategy::ResizeStrategy;

/// Tunables of a [`SashTree`](crate::SashTree).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Minimum width of the root, inherited by split children.
    pub min_width: f64,
    /// Minimum height of the root, inherited by split children.
    pub min_height: f64,
    pub resize_strategy: ResizeStrategy,
    /// Center inset of the drop-zone classifier, per side.
    pub zone_inset: f64,
    /// Share of the hovered pane given to the dropped pane on an edge drop.
    pub drop_split_ratio: f64,
    /// Prefix of generated ids.
    pub id_prefix: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_width: 100.0,
            min_height: 100.0,
            resize_strategy: ResizeStrategy::Classic,
            zone_inset: bwin_core::zone::DEFAULT_CENTER_INSET,
            drop_split_ratio: 0.5,
            id_prefix: "sash".to_string(),
        }
    }
}

impl LayoutConfig {
    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str::<Self>(s)
            .map_err(ConfigError::Toml)?
            .validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(s)
            .map_err(ConfigError::Json)?
            .validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (field, value) in [("min_width", self.min_width), ("min_height", self.min_height)] {
            if !value.is_finite() || value <= 0.0 {
                errors.push(format!("{field} must be finite and > 0, got {value}"));
            }
        }

        if !(0.0..=0.5).contains(&self.zone_inset) {
            errors.push(format!(
                "zone_inset must be in [0, 0.5], got {}",
                self.zone_inset
            ));
        }

        if !(self.drop_split_ratio > 0.0 && self.drop_split_ratio < 1.0) {
            errors.push(format!(
                "drop_split_ratio must be in (0, 1), got {}",
                self.drop_split_ratio
            ));
        }

        if self.id_prefix.is_empty() {
            errors.push("id_prefix must not be empty".into());
        }

        errors
    }

    /// Drop-zone classifier using [`zone_inset`](Self::zone_inset).
    pub fn zone_classifier(&self) -> Result<ZoneClassifier, ZoneClassifierError> {
        ZoneClassifier::new(self.zone_inset)
    }

    #[cfg(feature = "config")]
    fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Errors that can occur when loading a layout configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),
    #[cfg(feature = "config")]
    #[error("TOML parse error: {0}")]
    Toml(#[source] toml::de::Error),
    #[cfg(feature = "config")]
    #[error("JSON parse error: {0}")]
    Json(#[source] serde_json::Error),
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
