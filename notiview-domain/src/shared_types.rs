use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Represents a unique identifier for an application.
///
/// For captured notifications this is the package/bundle identifier the OS
/// reports as the notification's originator.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default, PartialOrd, Ord)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Creates a new `ApplicationId`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the provided `id` is empty.
    pub fn new(id: impl Into<String>) -> Self {
        let id_str = id.into();
        debug_assert!(!id_str.is_empty(), "ApplicationId must not be empty.");
        Self(id_str)
    }

    /// Returns a string slice of the application ID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApplicationId").field(&self.0).finish()
    }
}

impl Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ApplicationId {
    fn from(id: String) -> Self {
        debug_assert!(!id.is_empty(), "ApplicationId must not be empty.");
        Self(id)
    }
}

impl From<&str> for ApplicationId {
    fn from(id: &str) -> Self {
        debug_assert!(!id.is_empty(), "ApplicationId must not be empty.");
        Self(id.to_string())
    }
}
