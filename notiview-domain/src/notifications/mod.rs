// Main module for the notification capture types, store, and status logic.

pub mod status;
pub mod store;
pub mod types;

// Re-exports for easier access by consumers of this submodule or parent modules.
pub use status::{listener_status, ListenerStatus};
pub use store::NotificationStore;
pub use types::NotificationEvent;
