//! Error types for the demo.

use std::path::PathBuf;
use thiserror::Error;

/// Errors loading or validating TOML configuration and scripts.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Offending file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for the expected shape
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of its allowed range
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue {
        /// Field name as written in the file
        field: String,
        /// What is wrong with it
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors while running the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Configuration or script problem
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A script step targets a widget the page does not have
    #[error("no widget with test id `{0}`")]
    MissingWidget(String),

    /// JSON output failed
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
