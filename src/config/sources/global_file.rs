//! Global config file source: $XDG_CONFIG_HOME/fieldswap/config.toml (~/.config/fieldswap/config.toml)

use crate::config::paths::global_config_path;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use tracing::debug;

/// Add global config file source to builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(path) = global_config_path() {
        if path.exists() {
            builder = builder.add_source(File::from(path.as_path()).required(false));
        } else {
            debug!(
                config_path = %path.display(),
                "No global configuration file; using workspace and built-in settings"
            );
        }
    }
    Ok(builder)
}
