//! System layer for the Notiview notification viewer.
//!
//! This crate sits between the OS notification pipeline and the domain
//! store: it models the raw platform notification payload, translates
//! listener callbacks into store operations, and implements the
//! notification-access port by driving platform commands.

pub mod error;
pub mod listener;
pub mod settings_launcher;

pub use error::{SystemError, SystemResult};
pub use listener::{NotificationListenerBridge, RawNotification, RawPayload, FLAG_ONGOING_EVENT};
pub use settings_launcher::CommandSettingsLauncher;
