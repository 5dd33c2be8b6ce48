//! Error types for fieldswap.

use crate::field::VALID_FIELDS;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the two configuration files an I/O failure concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFile {
    /// `nm_config.ini`, the file that gets patched.
    Current,
    /// `field_config.ini`, the per-field defaults.
    FieldDefaults,
}

impl fmt::Display for ConfigFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFile::Current => f.write_str("current configuration"),
            ConfigFile::FieldDefaults => f.write_str("field defaults"),
        }
    }
}

/// Failures of a single field switch. All are terminal; nothing is retried.
#[derive(Debug, Error)]
pub enum SwitchError {
    #[error("Unknown field: \"{requested}\". Valid fields:\n{}", VALID_FIELDS.join(", "))]
    UnknownField { requested: String },

    #[error("Failed to read {file} file {}: {source}", .path.display())]
    FileRead {
        file: ConfigFile,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not find defaults for field \"{field}\" in {}", .path.display())]
    MissingFieldSection { field: String, path: PathBuf },

    #[error("Failed to write current configuration file {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SwitchError {
    /// Stable identifier for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            SwitchError::UnknownField { .. } => "unknown_field",
            SwitchError::FileRead { .. } => "file_read",
            SwitchError::MissingFieldSection { .. } => "missing_field_section",
            SwitchError::FileWrite { .. } => "file_write",
        }
    }
}

/// Application-level errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Switch(#[from] SwitchError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Switch(e) => e.kind(),
            ApiError::ConfigError(_) => "config",
        }
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
