//! Platform directories for fieldswap's own files.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

const APP_NAME: &str = "fieldswap";

/// `$XDG_CONFIG_HOME/fieldswap/config.toml`, or the platform equivalent.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.config_dir().join(APP_NAME).join("config.toml"))
}

/// Directory for the default log file.
pub fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.data_dir().to_path_buf())
}
