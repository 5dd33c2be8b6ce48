//! ConfigLoader: single entry point for building a [`FieldswapConfig`].

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::FieldswapConfig;
use config::{ConfigError, File};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): built-in defaults, global file, workspace
    /// `config/config.toml`, workspace `config/{FIELDSWAP_ENV}.toml`, `FIELDSWAP_*`
    /// environment variables.
    pub fn load(workspace_root: &Path) -> Result<FieldswapConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = merge_policy::add_environment(builder);

        let config: FieldswapConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load a single explicit file. Environment variables still apply on top.
    pub fn load_from_file(path: &Path) -> Result<FieldswapConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true));
        let builder = merge_policy::add_environment(builder);
        builder.build()?.try_deserialize()
    }

    /// Global configuration file location, if the platform has one.
    pub fn xdg_config_path() -> Option<PathBuf> {
        super::paths::global_config_path()
    }
}
