//! Listener status derivation for the UI's status indicator.
//!
//! "Access not granted" is state, not an error: the system takes no
//! corrective action itself and relies on the user to grant access through
//! the OS settings surface (see [`crate::ports::NotificationAccessPort`]).

use serde::{Deserialize, Serialize};

use super::store::NotificationStore;
use crate::ports::{NotificationAccessPort, SettingsAccessError};

/// Combined listener status as surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListenerStatus {
    /// Notification access has not been granted to this process.
    AccessDisabled,
    /// Access is granted but the listener is not currently attached.
    AwaitingConnection,
    /// The listener is attached and delivering notifications.
    Connected,
}

impl ListenerStatus {
    /// Derives the status from the grant flag and the connection flag.
    /// A missing grant always dominates: a stale connection flag after a
    /// revocation still reads as disabled.
    pub fn from_flags(access_granted: bool, connected: bool) -> Self {
        match (access_granted, connected) {
            (false, _) => ListenerStatus::AccessDisabled,
            (true, false) => ListenerStatus::AwaitingConnection,
            (true, true) => ListenerStatus::Connected,
        }
    }
}

/// Queries the grant state through the port and combines it with the store's
/// connection flag. Intended to be re-run whenever the application regains
/// foreground focus, since the OS reports no grant change events.
pub async fn listener_status(
    port: &dyn NotificationAccessPort,
    store: &NotificationStore,
) -> Result<ListenerStatus, SettingsAccessError> {
    let access_granted = port.is_access_granted().await?;
    Ok(ListenerStatus::from_flags(access_granted, store.connected()))
}
