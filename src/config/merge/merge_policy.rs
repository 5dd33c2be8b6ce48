//! Merge rules: defaults, override order, environment overrides.

use crate::keys::DEFAULT_SWITCH_KEY;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};

/// Prefix for environment overrides, e.g. `FIELDSWAP_NATRO__ROOT`.
pub const ENV_PREFIX: &str = "FIELDSWAP";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(Config::builder()
        .set_default("key.name", DEFAULT_SWITCH_KEY)?
        .set_default("key.enabled", true)?)
}

/// Environment variables override every file source.
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__"),
    )
}
