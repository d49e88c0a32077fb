//! Opaque user identity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An opaque user identifier used to namespace per-user persisted data.
///
/// The identity is issued by the account service and treated as an opaque
/// string here: no format is assumed beyond string equality. Two carts
/// belong to the same user exactly when their identities compare equal.
///
/// ## Examples
///
/// ```
/// use greenbasket_core::UserId;
///
/// let id = UserId::new("u-1042");
/// assert_eq!(id.as_str(), "u-1042");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create an identity from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `UserId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let id = UserId::new("u-7");
        assert_eq!(format!("{id}"), "u-7");
    }

    #[test]
    fn test_serde_transparent() {
        let id = UserId::new("u-7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"u-7\"");

        let parsed: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_equality_is_string_equality() {
        assert_eq!(UserId::new("a"), UserId::from("a"));
        assert_ne!(UserId::new("a"), UserId::new("A"));
    }
}
