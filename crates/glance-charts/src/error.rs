//! Error types for chart configuration.
//!
//! Layout itself never fails: degenerate data takes explicit branches.
//! Errors only arise while loading or validating declarative configs.

use glance_core::ColorParseError;
use thiserror::Error;

/// Errors raised while building a chart from configuration.
#[derive(Debug, Error)]
pub enum ChartError {
    /// JSON document could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML document could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A colour string was malformed.
    #[error("Color error: {0}")]
    Color(#[from] ColorParseError),

    /// A configuration value is outside its allowed range.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: &'static str,
        /// Error message
        message: String,
    },
}

impl ChartError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}
