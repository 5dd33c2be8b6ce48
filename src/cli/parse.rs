//! CLI parse: clap types for fieldswap. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fieldswap CLI - switch the active Natro Macro gathering field
#[derive(Parser)]
#[command(name = "fieldswap")]
#[command(about = "Switch the active gathering field with defaults from field_config.ini")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace directory holding config/config.toml
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Natro Macro installation directory
    #[arg(long)]
    pub natro_root: Option<PathBuf>,

    /// Path to nm_config.ini (overrides --natro-root)
    #[arg(long)]
    pub current_config: Option<PathBuf>,

    /// Path to field_config.ini (overrides --natro-root)
    #[arg(long)]
    pub field_config: Option<PathBuf>,

    /// Debug logging, mirrored to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Switch the active field (case sensitive)
    Switch {
        /// Field to gather in, e.g. "Pine Tree"
        name: String,
        /// Show the patched keys without writing nm_config.ini
        #[arg(long)]
        dry_run: bool,
        /// Skip the key press before switching
        #[arg(long)]
        no_key: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the resolved defaults for a field
    Show {
        /// Field name (case sensitive)
        name: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List the fields that can be switched to
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the effective configuration as TOML
    Config,
}
