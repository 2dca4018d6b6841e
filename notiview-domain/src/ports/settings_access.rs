use async_trait::async_trait;
use thiserror::Error;

/// Errors from the notification-access port.
#[derive(Debug, Error)]
pub enum SettingsAccessError {
    #[error("Failed to open the notification access settings surface: {reason}")]
    LaunchFailed { reason: String },

    #[error("Failed to query the notification access grant state: {reason}")]
    ProbeFailed { reason: String },
}

/// Trait for the platform surface that controls notification access.
/// The domain uses it to re-check the grant when the application regains
/// focus and to send the user to the OS settings screen; it never learns
/// about the grant any other way.
#[async_trait]
pub trait NotificationAccessPort: Send + Sync {
    /// Returns whether the OS currently grants this process access to the
    /// notification pipeline.
    async fn is_access_granted(&self) -> Result<bool, SettingsAccessError>;

    /// Opens the OS notification-access settings surface. Fire-and-forget:
    /// no grant result is observed; callers re-probe via
    /// [`is_access_granted`](Self::is_access_granted) later.
    async fn open_access_settings(&self) -> Result<(), SettingsAccessError>;
}
