//! The in-memory notification store.
//!
//! Single source of truth for the current set of captured notifications and
//! the listener connection flag. State is held in `tokio::sync::watch`
//! channels: every mutation swaps the snapshot atomically under the channel's
//! writer lock, so readers on other threads never observe a partially-updated
//! collection, and a subscriber created after a change sees only the current
//! value (no replay of earlier states).

use std::cmp::Reverse;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use super::types::NotificationEvent;

/// Observable store for captured notifications.
///
/// Constructed once at process start and handed by clone to the listener
/// side (sole writer) and to any number of readers. All operations are
/// synchronous and infallible; unknown removal keys and empty clears are
/// silent no-ops by policy.
#[derive(Debug, Clone)]
pub struct NotificationStore {
    connected: Arc<watch::Sender<bool>>,
    events: Arc<watch::Sender<Vec<NotificationEvent>>>,
}

impl NotificationStore {
    /// Creates a store with default state: disconnected, no events.
    pub fn new() -> Self {
        let (connected, _) = watch::channel(false);
        let (events, _) = watch::channel(Vec::new());
        NotificationStore {
            connected: Arc::new(connected),
            events: Arc::new(events),
        }
    }

    /// Unconditionally overwrites the listener connection flag.
    ///
    /// Observers are notified even when the value did not change, matching
    /// the listener callback contract (attach/detach are always reported).
    pub fn set_connected(&self, is_connected: bool) {
        debug!(is_connected, "listener connection state changed");
        self.connected.send_replace(is_connected);
    }

    /// Adds or replaces a notification, keyed by `event.key`.
    ///
    /// Any prior event with the same key is discarded (latest wins, no
    /// history). The collection is kept sorted by `posted_at` descending;
    /// the sort is stable, so events with equal timestamps stay in
    /// insertion order.
    pub fn upsert(&self, event: NotificationEvent) {
        debug!(key = %event.key, package = %event.package_name, "upserting notification");
        self.events.send_modify(|events| {
            events.retain(|e| e.key != event.key);
            events.push(event);
            events.sort_by_key(|e| Reverse(e.posted_at));
        });
    }

    /// Removes the notification with the given key, if present.
    ///
    /// Removing an absent key is a no-op, not an error; observers are only
    /// woken when something was actually removed.
    pub fn remove_by_key(&self, key: &str) {
        self.events.send_if_modified(|events| {
            let before = events.len();
            events.retain(|e| e.key != key);
            let removed = events.len() != before;
            if removed {
                debug!(key, "removed notification");
            }
            removed
        });
    }

    /// Unconditionally replaces the event collection with the empty one.
    pub fn clear(&self) {
        debug!("clearing all notifications");
        self.events.send_modify(|events| events.clear());
    }

    /// Current value of the connection flag.
    pub fn connected(&self) -> bool {
        *self.connected.borrow()
    }

    /// Snapshot of the current event collection, most recent first.
    pub fn events(&self) -> Vec<NotificationEvent> {
        self.events.borrow().clone()
    }

    /// Subscribes to connection flag changes. Dropping the receiver
    /// unsubscribes.
    pub fn watch_connected(&self) -> watch::Receiver<bool> {
        self.connected.subscribe()
    }

    /// Subscribes to event collection changes. Dropping the receiver
    /// unsubscribes.
    pub fn watch_events(&self) -> watch::Receiver<Vec<NotificationEvent>> {
        self.events.subscribe()
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_types::ApplicationId;

    fn event(key: &str, posted_at: i64) -> NotificationEvent {
        NotificationEvent {
            key: key.to_string(),
            package_name: ApplicationId::new("com.example.app"),
            title: Some(format!("title-{key}")),
            text: None,
            posted_at,
            is_ongoing: false,
        }
    }

    fn keys(store: &NotificationStore) -> Vec<String> {
        store.events().into_iter().map(|e| e.key).collect()
    }

    #[test]
    fn starts_disconnected_and_empty() {
        let store = NotificationStore::new();
        assert!(!store.connected());
        assert!(store.events().is_empty());
    }

    #[test]
    fn upsert_orders_by_post_time_descending() {
        let store = NotificationStore::new();
        store.upsert(event("a", 100));
        store.upsert(event("b", 200));
        assert_eq!(keys(&store), ["b", "a"]);
    }

    #[test]
    fn upsert_replaces_existing_key() {
        let store = NotificationStore::new();
        store.upsert(event("a", 100));
        store.upsert(event("b", 200));
        store.upsert(event("a", 300));

        let events = store.events();
        assert_eq!(keys(&store), ["a", "b"]);
        assert_eq!(events[0].posted_at, 300);
        assert_eq!(events.iter().filter(|e| e.key == "a").count(), 1);
    }

    #[test]
    fn replace_wins_regardless_of_prior_fields() {
        let store = NotificationStore::new();
        let mut first = event("a", 100);
        first.title = Some("old".to_string());
        first.is_ongoing = true;
        store.upsert(first);

        let second = event("a", 50);
        store.upsert(second.clone());

        assert_eq!(store.events(), [second]);
    }

    #[test]
    fn equal_timestamps_keep_insertion_order() {
        let store = NotificationStore::new();
        store.upsert(event("a", 100));
        store.upsert(event("b", 100));
        store.upsert(event("c", 100));
        store.upsert(event("d", 200));
        assert_eq!(keys(&store), ["d", "a", "b", "c"]);
    }

    #[test]
    fn remove_by_key_is_idempotent() {
        let store = NotificationStore::new();
        store.upsert(event("a", 100));
        store.remove_by_key("missing");
        assert_eq!(keys(&store), ["a"]);
        store.remove_by_key("a");
        assert!(store.events().is_empty());
        store.remove_by_key("a");
        assert!(store.events().is_empty());
    }

    #[test]
    fn clear_is_absolute() {
        let store = NotificationStore::new();
        store.clear();
        assert!(store.events().is_empty());
        store.upsert(event("a", 100));
        store.upsert(event("b", 200));
        store.clear();
        assert!(store.events().is_empty());
    }

    #[tokio::test]
    async fn observers_see_each_mutation() {
        let store = NotificationStore::new();
        let mut rx = store.watch_events();

        store.upsert(event("a", 100));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().len(), 1);

        store.remove_by_key("a");
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_empty());
    }

    #[tokio::test]
    async fn noop_removal_does_not_wake_observers() {
        let store = NotificationStore::new();
        store.upsert(event("a", 100));

        let rx = store.watch_events();
        store.remove_by_key("missing");
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn late_subscriber_sees_only_current_connection_state() {
        let store = NotificationStore::new();
        store.set_connected(true);
        store.set_connected(false);

        // A receiver created now has the current value marked as seen:
        // there is no replay of the earlier `true`.
        let rx = store.watch_connected();
        assert!(!*rx.borrow());
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn slow_observers_coalesce_to_latest_state() {
        let store = NotificationStore::new();
        let mut rx = store.watch_events();

        store.upsert(event("a", 100));
        store.upsert(event("b", 200));
        store.remove_by_key("a");

        rx.changed().await.unwrap();
        assert_eq!(
            rx.borrow_and_update()
                .iter()
                .map(|e| e.key.as_str())
                .collect::<Vec<_>>(),
            ["b"]
        );
    }

    #[test]
    fn writes_from_another_thread_are_visible() {
        let store = NotificationStore::new();
        let writer = store.clone();

        let handle = std::thread::spawn(move || {
            writer.set_connected(true);
            for i in 0..100 {
                writer.upsert(event(&format!("k{i}"), i));
            }
        });
        handle.join().unwrap();

        assert!(store.connected());
        let events = store.events();
        assert_eq!(events.len(), 100);
        assert!(events.windows(2).all(|w| w[0].posted_at >= w[1].posted_at));
    }
}
