//! Domain layer for the Notiview notification viewer.
//!
//! This crate holds the in-memory notification store — the single source of
//! truth for "which notifications are currently known" and "is the listener
//! attached" — together with its data types and the ports the domain expects
//! outer layers to implement. The store is observable: the UI layer reads
//! snapshots and subscribes for changes, while the platform listener (see the
//! `notiview-system` crate) is the sole writer.

// Export domain modules
pub mod notifications;
pub mod ports;
pub mod shared_types;

// Re-export common types and interfaces
pub use notifications::{
    listener_status, ListenerStatus, NotificationEvent, NotificationStore,
};
pub use ports::{NotificationAccessPort, SettingsAccessError};
pub use shared_types::ApplicationId;
