//! Bridge between the OS notification listener callbacks and the store.
//!
//! The host OS may invoke listener callbacks on a service thread distinct
//! from the UI thread; the store's watch channels make each mutation visible
//! across threads, so the bridge itself carries no synchronization.

use notiview_domain::NotificationStore;
use tracing::debug;

use super::raw::RawNotification;

/// Translates listener callbacks into store operations.
///
/// Holds the sole writer handle to the store. One callback maps to at most
/// one store operation; callbacks without usable content are silent no-ops.
pub struct NotificationListenerBridge {
    store: NotificationStore,
}

impl NotificationListenerBridge {
    pub fn new(store: NotificationStore) -> Self {
        NotificationListenerBridge { store }
    }

    /// The listener attached to the OS notification pipeline.
    pub fn on_listener_connected(&self) {
        debug!("notification listener connected");
        self.store.set_connected(true);
    }

    /// The listener detached, explicitly or OS-initiated.
    pub fn on_listener_disconnected(&self) {
        debug!("notification listener disconnected");
        self.store.set_connected(false);
    }

    /// A notification was posted or updated in place.
    pub fn on_notification_posted(&self, raw: &RawNotification) {
        let Some(event) = raw.to_event() else {
            debug!(key = %raw.key, "dropping posted notification without payload");
            return;
        };
        debug!(
            package = %event.package_name,
            title = ?event.title,
            text = ?event.text,
            "notification posted"
        );
        self.store.upsert(event);
    }

    /// A notification was removed; the OS may hand over no reference at all.
    pub fn on_notification_removed(&self, raw: Option<&RawNotification>) {
        let Some(key) = raw.map(|r| r.key.as_str()) else {
            debug!("removal callback without notification reference, ignoring");
            return;
        };
        debug!(key, "notification removed");
        self.store.remove_by_key(key);
    }
}
