use serde::{Deserialize, Serialize};

use crate::shared_types::ApplicationId;

/// One captured notification.
///
/// `key` is the unique identifier the OS assigns to the notification
/// instance; the store keeps at most one event per key (latest wins, see
/// [`crate::notifications::store::NotificationStore::upsert`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub key: String,
    pub package_name: ApplicationId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Milliseconds since the Unix epoch, assigned by the OS at post time.
    pub posted_at: i64,
    /// True for persistent/ongoing notifications the user cannot dismiss.
    #[serde(default)]
    pub is_ongoing: bool,
}
