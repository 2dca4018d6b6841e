// This module defines traits (ports) that the domain logic expects
// to be implemented by outer layers (e.g., the system or UI shell).

pub mod settings_access;
pub use settings_access::{NotificationAccessPort, SettingsAccessError};
