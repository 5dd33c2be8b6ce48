//! Configuration System
//!
//! Layered settings (defaults, global file, workspace files, environment) that
//! locate the Natro Macro configuration files, choose the key sender and set up
//! logging. The switch core never reads these itself; it receives explicit
//! [`SwitchPaths`] built here.

use crate::error::ApiError;
use crate::keys::DEFAULT_SWITCH_KEY;
use crate::logging::LoggingConfig;
use crate::switch::SwitchPaths;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod paths;
mod sources;

pub use facade::ConfigLoader;

/// Platform directory helpers
pub mod xdg {
    pub use super::paths::*;
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldswapConfig {
    /// Where the Natro Macro files live
    #[serde(default)]
    pub natro: NatroConfig,

    /// Key pressed before switching
    #[serde(default)]
    pub key: KeyConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Natro Macro file locations.
///
/// `root` implies `settings/nm_config.ini` and `settings/field_config.ini`;
/// the explicit paths win when set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NatroConfig {
    #[serde(default)]
    pub root: Option<PathBuf>,

    #[serde(default)]
    pub current_config: Option<PathBuf>,

    #[serde(default)]
    pub field_config: Option<PathBuf>,
}

impl NatroConfig {
    /// Resolve the two file paths the switch operates on.
    pub fn resolve_paths(&self) -> Result<SwitchPaths, ApiError> {
        let derived = self.root.as_deref().map(SwitchPaths::from_natro_root);

        let current_config = self
            .current_config
            .clone()
            .or_else(|| derived.as_ref().map(|p| p.current_config.clone()));
        let field_config = self
            .field_config
            .clone()
            .or_else(|| derived.as_ref().map(|p| p.field_config.clone()));

        match (current_config, field_config) {
            (Some(current_config), Some(field_config)) => Ok(SwitchPaths {
                current_config,
                field_config,
            }),
            (None, _) => Err(ApiError::ConfigError(
                "No current configuration file: set natro.root or natro.current_config".to_string(),
            )),
            (_, None) => Err(ApiError::ConfigError(
                "No field defaults file: set natro.root or natro.field_config".to_string(),
            )),
        }
    }
}

/// Key sender settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyConfig {
    /// Send a key before switching
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Key identifier handed to the sender
    #[serde(default = "default_key_name")]
    pub name: String,

    /// Program and leading arguments; the key is appended. Empty means log only.
    #[serde(default)]
    pub command: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_key_name() -> String {
    DEFAULT_SWITCH_KEY.to_string()
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            name: default_key_name(),
            command: Vec::new(),
        }
    }
}

impl FieldswapConfig {
    /// Validate settings that would otherwise fail late.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.key.enabled && self.key.name.trim().is_empty() {
            return Err(ApiError::ConfigError(
                "key.name cannot be empty while key.enabled is true".to_string(),
            ));
        }
        if self.key.command.first().is_some_and(|p| p.trim().is_empty()) {
            return Err(ApiError::ConfigError(
                "key.command must start with a program name".to_string(),
            ));
        }
        Ok(())
    }
}
