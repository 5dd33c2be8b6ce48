//! Field command service: the invocation layer around the switch core.
//!
//! Mirrors what the chat command did: validate the requested name, press the
//! configured key, then rewrite `nm_config.ini`. Each operation returns a result
//! value; formatting belongs to the CLI presentation layer.

use crate::defaults::FieldDefaults;
use crate::error::SwitchError;
use crate::field::FieldName;
use crate::keys::KeySender;
use crate::mapping::{map_to_target, TargetKeyValues};
use crate::switch::{ConfigStore, FieldSwitcher, SwitchOutcome, SwitchPlan};
use tracing::{info, warn};

/// What happened to the key press that precedes a switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPress {
    Sent { key: String },
    Skipped,
    Failed { key: String, reason: String },
}

/// Result of `switch`.
#[derive(Debug, Clone)]
pub struct FieldSwitchResult {
    pub key_press: KeyPress,
    pub outcome: SwitchOutcome,
}

/// Result of `switch --dry-run`.
#[derive(Debug, Clone)]
pub struct FieldPreviewResult {
    pub plan: SwitchPlan,
}

/// Result of `show`.
#[derive(Debug, Clone)]
pub struct FieldShowResult {
    pub field: FieldName,
    pub defaults: FieldDefaults,
    pub target: TargetKeyValues,
}

/// Result of `list`.
#[derive(Debug, Clone)]
pub struct FieldListResult {
    pub fields: Vec<FieldName>,
}

/// Key press settings for a switch.
pub struct KeyPlan<'a> {
    pub key: &'a str,
    pub sender: &'a dyn KeySender,
}

pub struct FieldCommandService;

impl FieldCommandService {
    /// Validate, press the key (if any), switch and persist.
    ///
    /// The name is checked before the key press so an unknown field has no side
    /// effects. A failed key press is logged and does not stop the switch.
    pub fn switch<S: ConfigStore>(
        switcher: &FieldSwitcher<S>,
        requested: &str,
        key: Option<KeyPlan<'_>>,
    ) -> Result<FieldSwitchResult, SwitchError> {
        let field = FieldName::parse(requested)?;
        info!(field = field.as_str(), "Switching field with defaults from field_config.ini");

        let key_press = match key {
            Some(plan) => press(plan),
            None => KeyPress::Skipped,
        };

        let outcome = switcher.switch(field.as_str())?;
        Ok(FieldSwitchResult { key_press, outcome })
    }

    /// Compute the switch without pressing keys or writing.
    pub fn preview<S: ConfigStore>(
        switcher: &FieldSwitcher<S>,
        requested: &str,
    ) -> Result<FieldPreviewResult, SwitchError> {
        let plan = switcher.plan(requested)?;
        Ok(FieldPreviewResult { plan })
    }

    pub fn show<S: ConfigStore>(
        switcher: &FieldSwitcher<S>,
        requested: &str,
    ) -> Result<FieldShowResult, SwitchError> {
        let (field, defaults) = switcher.field_defaults(requested)?;
        let target = map_to_target(&defaults);
        Ok(FieldShowResult {
            field,
            defaults,
            target,
        })
    }

    pub fn list() -> FieldListResult {
        FieldListResult {
            fields: FieldName::all().collect(),
        }
    }
}

fn press(plan: KeyPlan<'_>) -> KeyPress {
    match plan.sender.send_key(plan.key) {
        Ok(()) => KeyPress::Sent {
            key: plan.key.to_string(),
        },
        Err(e) => {
            warn!(key = plan.key, error = %e, "Key press failed; switching anyway");
            KeyPress::Failed {
                key: plan.key.to_string(),
                reason: e.to_string(),
            }
        }
    }
}
