//! Raw platform notification payloads as delivered to the listener.

use notiview_domain::{ApplicationId, NotificationEvent};

/// Flag bit marking a persistent/ongoing notification the user cannot
/// dismiss (progress notifications, media playback, and the like).
pub const FLAG_ONGOING_EVENT: u32 = 0x0000_0002;

/// The content portion of a raw notification.
///
/// Title and text each come in a short and an expanded ("big") variant; the
/// big variant is only populated for expanded notification styles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawPayload {
    pub title: Option<String>,
    pub big_title: Option<String>,
    pub text: Option<String>,
    pub big_text: Option<String>,
    pub flags: u32,
}

/// One notification as the OS hands it to the listener callback.
///
/// `payload` is `None` when the OS delivers only the identity shell of a
/// notification without its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNotification {
    pub key: String,
    pub package_name: String,
    pub post_time_ms: i64,
    pub payload: Option<RawPayload>,
}

impl RawNotification {
    /// Extracts a domain event from the raw payload.
    ///
    /// Returns `None` when the payload is absent; such notifications are
    /// dropped rather than stored with defaulted fields. Title and text
    /// prefer the short field and fall back to the expanded one.
    pub fn to_event(&self) -> Option<NotificationEvent> {
        let payload = self.payload.as_ref()?;

        let title = payload.title.clone().or_else(|| payload.big_title.clone());
        let text = payload.text.clone().or_else(|| payload.big_text.clone());

        Some(NotificationEvent {
            key: self.key.clone(),
            package_name: ApplicationId::new(self.package_name.clone()),
            title,
            text,
            posted_at: self.post_time_ms,
            is_ongoing: payload.flags & FLAG_ONGOING_EVENT != 0,
        })
    }
}
