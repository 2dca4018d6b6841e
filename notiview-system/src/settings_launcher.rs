//! Command-driven implementation of the notification-access port.

use std::process::{Command, Stdio};

use async_trait::async_trait;
use notiview_domain::ports::{NotificationAccessPort, SettingsAccessError};
use tracing::debug;

use crate::error::{SystemError, SystemResult};

/// Drives the platform's notification-access surface through two configured
/// command lines: one that opens the settings screen (spawned detached,
/// output discarded) and one whose exit status answers the grant probe.
pub struct CommandSettingsLauncher {
    settings_command: Vec<String>,
    probe_command: Vec<String>,
}

impl CommandSettingsLauncher {
    pub fn new(settings_command: Vec<String>, probe_command: Vec<String>) -> Self {
        CommandSettingsLauncher {
            settings_command,
            probe_command,
        }
    }

    fn command_for(argv: &[String], purpose: &'static str) -> SystemResult<Command> {
        let (program, args) = argv
            .split_first()
            .ok_or(SystemError::EmptyCommand { purpose })?;
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        Ok(command)
    }
}

#[async_trait]
impl NotificationAccessPort for CommandSettingsLauncher {
    async fn is_access_granted(&self) -> Result<bool, SettingsAccessError> {
        let status = Self::command_for(&self.probe_command, "access probe")
            .and_then(|mut command| {
                command.status().map_err(|e| SystemError::SpawnError {
                    command: self.probe_command[0].clone(),
                    error: e.to_string(),
                })
            })
            .map_err(|e| SettingsAccessError::ProbeFailed {
                reason: e.to_string(),
            })?;

        Ok(status.success())
    }

    async fn open_access_settings(&self) -> Result<(), SettingsAccessError> {
        Self::command_for(&self.settings_command, "settings launch")
            .and_then(|mut command| {
                // Fire-and-forget: the child is not awaited and no grant
                // result is observed here.
                command.spawn().map_err(|e| SystemError::SpawnError {
                    command: self.settings_command[0].clone(),
                    error: e.to_string(),
                })?;
                Ok(())
            })
            .map_err(|e| SettingsAccessError::LaunchFailed {
                reason: e.to_string(),
            })?;

        debug!(command = ?self.settings_command, "opened notification access settings");
        Ok(())
    }
}
