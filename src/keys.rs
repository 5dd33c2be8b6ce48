//! Send-key collaborator.
//!
//! Before the configuration is rewritten, the macro window is nudged with a key
//! press so it drops back to its settings view. The switch itself never waits on
//! or verifies that effect; failures are reported by the caller and otherwise ignored.

use std::process::Command;
use thiserror::Error;
use tracing::{debug, info};

/// Key pressed before a field switch unless configured otherwise.
pub const DEFAULT_SWITCH_KEY: &str = "f3";

#[derive(Debug, Error)]
pub enum KeySendError {
    #[error("Failed to launch key sender '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Key sender '{program}' exited with {status}")]
    Failed { program: String, status: String },
}

/// Something that can press a key in the automation tool.
pub trait KeySender {
    fn send_key(&self, key: &str) -> Result<(), KeySendError>;
}

/// Records the key press in the log without touching the desktop.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogKeySender;

impl KeySender for LogKeySender {
    fn send_key(&self, key: &str) -> Result<(), KeySendError> {
        info!(key, "No key sender command configured; skipping key press");
        Ok(())
    }
}

/// Runs an external program (for example `xdotool key`) with the key appended.
#[derive(Debug, Clone)]
pub struct CommandKeySender {
    program: String,
    args: Vec<String>,
}

impl CommandKeySender {
    /// Build from a command line split into words. Returns `None` for an empty command.
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl KeySender for CommandKeySender {
    fn send_key(&self, key: &str) -> Result<(), KeySendError> {
        debug!(program = %self.program, args = ?self.args, key, "Sending key");
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(key)
            .status()
            .map_err(|source| KeySendError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(KeySendError::Failed {
                program: self.program.clone(),
                status: status.to_string(),
            })
        }
    }
}

/// Pick the sender for a configured command line.
pub fn sender_for(command: &[String]) -> Box<dyn KeySender> {
    match CommandKeySender::from_command(command) {
        Some(sender) => Box::new(sender),
        None => Box::new(LogKeySender),
    }
}
