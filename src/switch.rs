//! Field switch orchestration.
//!
//! Reads `field_config.ini` and `nm_config.ini`, resolves the requested field's
//! defaults and patches them into slot 1 of the current configuration. The target
//! file is written exactly once, after every patch succeeded in memory.

use crate::defaults::{resolve, FieldDefaults};
use crate::error::{ConfigFile, SwitchError};
use crate::field::FieldName;
use crate::ini;
use crate::mapping::map_to_target;
use crate::patch::patch_line;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const CURRENT_FIELD_NUM_KEY: &str = "CurrentFieldNum";
pub const FIELD_NAME_KEY: &str = "FieldName1";
/// The switch always activates slot 1.
pub const ACTIVE_SLOT: &str = "1";

/// Locations of the two files a switch works on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchPaths {
    /// `nm_config.ini`; read and overwritten.
    pub current_config: PathBuf,
    /// `field_config.ini`; read only.
    pub field_config: PathBuf,
}

impl SwitchPaths {
    /// Standard layout below a Natro Macro installation.
    pub fn from_natro_root(root: &Path) -> Self {
        let settings = root.join("settings");
        Self {
            current_config: settings.join("nm_config.ini"),
            field_config: settings.join("field_config.ini"),
        }
    }
}

/// Text storage for configuration files.
pub trait ConfigStore {
    fn read(&self, path: &Path) -> io::Result<String>;
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Plain filesystem access.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsConfigStore;

impl ConfigStore for FsConfigStore {
    fn read(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}

/// Patched configuration computed in memory.
#[derive(Debug, Clone)]
pub struct SwitchPlan {
    pub field: FieldName,
    pub defaults: FieldDefaults,
    /// Every key set, in application order.
    pub assignments: Vec<(String, String)>,
    /// Keys that matched no line and were left alone.
    pub unmatched_keys: Vec<String>,
    pub patched_text: String,
}

impl SwitchPlan {
    /// Number of keys that matched a line and were rewritten.
    pub fn patched_count(&self) -> usize {
        self.assignments.len() - self.unmatched_keys.len()
    }
}

/// Result of a completed switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchOutcome {
    pub field: String,
    pub keys_patched: usize,
    pub unmatched_keys: Vec<String>,
    pub current_config: PathBuf,
}

/// Drives parse, resolve, map and patch over explicitly configured paths.
pub struct FieldSwitcher<S: ConfigStore = FsConfigStore> {
    paths: SwitchPaths,
    store: S,
}

impl FieldSwitcher<FsConfigStore> {
    pub fn new(paths: SwitchPaths) -> Self {
        Self::with_store(paths, FsConfigStore)
    }
}

impl<S: ConfigStore> FieldSwitcher<S> {
    pub fn with_store(paths: SwitchPaths, store: S) -> Self {
        Self { paths, store }
    }

    pub fn paths(&self) -> &SwitchPaths {
        &self.paths
    }

    /// Resolve the defaults for `requested` without reading the current configuration.
    pub fn field_defaults(&self, requested: &str) -> Result<(FieldName, FieldDefaults), SwitchError> {
        let field = FieldName::parse(requested)?;
        let field_text = self.read(ConfigFile::FieldDefaults, &self.paths.field_config)?;
        let defaults = self.resolve_field(field, &field_text)?;
        Ok((field, defaults))
    }

    /// Run the whole pipeline in memory. Nothing is written.
    pub fn plan(&self, requested: &str) -> Result<SwitchPlan, SwitchError> {
        let field = FieldName::parse(requested)?;
        let current_text = self.read(ConfigFile::Current, &self.paths.current_config)?;
        let field_text = self.read(ConfigFile::FieldDefaults, &self.paths.field_config)?;

        let defaults = self.resolve_field(field, &field_text)?;
        let target = map_to_target(&defaults);

        let mut assignments = vec![
            (CURRENT_FIELD_NUM_KEY.to_string(), ACTIVE_SLOT.to_string()),
            (FIELD_NAME_KEY.to_string(), field.as_str().to_string()),
        ];
        assignments.extend(target.iter().map(|(k, v)| (k.to_string(), v.to_string())));

        let mut patched_text = current_text;
        let mut unmatched_keys = Vec::new();
        for (key, value) in &assignments {
            match patch_line(&patched_text, key, value) {
                Some(next) => patched_text = next,
                None => unmatched_keys.push(key.clone()),
            }
        }

        if !unmatched_keys.is_empty() {
            warn!(
                path = %self.paths.current_config.display(),
                keys = ?unmatched_keys,
                "Current configuration has no line for some keys; they were not patched"
            );
        }

        Ok(SwitchPlan {
            field,
            defaults,
            assignments,
            unmatched_keys,
            patched_text,
        })
    }

    /// Switch the active field to `requested` and persist the result.
    pub fn switch(&self, requested: &str) -> Result<SwitchOutcome, SwitchError> {
        let plan = self.plan(requested)?;

        self.store
            .write(&self.paths.current_config, &plan.patched_text)
            .map_err(|source| SwitchError::FileWrite {
                path: self.paths.current_config.clone(),
                source,
            })?;

        info!(
            field = plan.field.as_str(),
            keys_patched = plan.patched_count(),
            path = %self.paths.current_config.display(),
            "Field switched"
        );

        Ok(SwitchOutcome {
            field: plan.field.as_str().to_string(),
            keys_patched: plan.patched_count(),
            unmatched_keys: plan.unmatched_keys,
            current_config: self.paths.current_config.clone(),
        })
    }

    fn read(&self, file: ConfigFile, path: &Path) -> Result<String, SwitchError> {
        debug!(%file, path = %path.display(), "Reading configuration");
        self.store.read(path).map_err(|source| SwitchError::FileRead {
            file,
            path: path.to_path_buf(),
            source,
        })
    }

    fn resolve_field(&self, field: FieldName, field_text: &str) -> Result<FieldDefaults, SwitchError> {
        let sections = ini::parse(field_text);
        let section = sections
            .get(field.as_str())
            .ok_or_else(|| SwitchError::MissingFieldSection {
                field: field.as_str().to_string(),
                path: self.paths.field_config.clone(),
            })?;
        Ok(resolve(section))
    }
}
