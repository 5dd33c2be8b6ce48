//! CLI route: single route table and run context. Dispatches to the field command
//! service and presentation.

use crate::cli::help::command_name;
use crate::cli::parse::{Cli, Commands};
use crate::cli::presentation::{
    format_list_result_json, format_list_result_text, format_preview_result_json,
    format_preview_result_text, format_show_result_json, format_show_result_text,
    format_switch_result_json, format_switch_result_text,
};
use crate::command::{FieldCommandService, KeyPlan};
use crate::config::{ConfigLoader, FieldswapConfig};
use crate::error::ApiError;
use crate::keys::sender_for;
use crate::switch::FieldSwitcher;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: effective configuration after CLI overrides.
pub struct RunContext {
    config: FieldswapConfig,
    workspace_root: PathBuf,
}

impl RunContext {
    /// Create run context from parsed CLI flags. Uses ConfigLoader only.
    pub fn new(cli: &Cli) -> Result<Self, ApiError> {
        let mut config = if let Some(ref cfg_path) = cli.config {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&cli.workspace)?
        };

        if let Some(ref root) = cli.natro_root {
            config.natro.root = Some(root.clone());
        }
        if let Some(ref path) = cli.current_config {
            config.natro.current_config = Some(path.clone());
        }
        if let Some(ref path) = cli.field_config {
            config.natro.field_config = Some(path.clone());
        }

        config.validate()?;

        Ok(Self {
            config,
            workspace_root: cli.workspace.clone(),
        })
    }

    /// Build directly from a configuration (used by tests and embedders).
    pub fn from_config(config: FieldswapConfig, workspace_root: PathBuf) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self {
            config,
            workspace_root,
        })
    }

    pub fn config(&self) -> &FieldswapConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let name = command_name(command);
        debug!(command = name, workspace = %self.workspace_root.display(), "Executing command");

        let result = self.execute_inner(command);

        info!(
            command = name,
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Switch {
                name,
                dry_run: true,
                format,
                ..
            } => {
                let switcher = self.switcher()?;
                let result = FieldCommandService::preview(&switcher, name)?;
                Ok(if format == "json" {
                    format_preview_result_json(&result)
                } else {
                    format_preview_result_text(&result)
                })
            }
            Commands::Switch {
                name,
                no_key,
                format,
                ..
            } => {
                let switcher = self.switcher()?;
                let sender = sender_for(&self.config.key.command);
                let key = (self.config.key.enabled && !*no_key).then(|| KeyPlan {
                    key: self.config.key.name.as_str(),
                    sender: sender.as_ref(),
                });
                let result = FieldCommandService::switch(&switcher, name, key)?;
                Ok(if format == "json" {
                    format_switch_result_json(&result)
                } else {
                    format_switch_result_text(&result)
                })
            }
            Commands::Show { name, format } => {
                let switcher = self.switcher()?;
                let result = FieldCommandService::show(&switcher, name)?;
                Ok(if format == "json" {
                    format_show_result_json(&result)
                } else {
                    format_show_result_text(&result)
                })
            }
            Commands::List { format } => {
                let result = FieldCommandService::list();
                Ok(if format == "json" {
                    format_list_result_json(&result)
                } else {
                    format_list_result_text(&result)
                })
            }
            Commands::Config => toml::to_string_pretty(&self.config).map_err(|e| {
                ApiError::ConfigError(format!("Failed to render configuration: {}", e))
            }),
        }
    }

    fn switcher(&self) -> Result<FieldSwitcher, ApiError> {
        let paths = self.config.natro.resolve_paths()?;
        debug!(
            current_config = %paths.current_config.display(),
            field_config = %paths.field_config.display(),
            "Resolved Natro Macro paths"
        );
        Ok(FieldSwitcher::new(paths))
    }
}
