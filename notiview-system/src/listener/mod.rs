// Listener-side integration: the raw platform payload model and the bridge
// that translates OS listener callbacks into domain store operations.

pub mod bridge;
pub mod raw;

pub use bridge::NotificationListenerBridge;
pub use raw::{RawNotification, RawPayload, FLAG_ONGOING_EVENT};
