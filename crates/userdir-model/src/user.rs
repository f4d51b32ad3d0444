//! The user record and wire-level response bodies.

use serde::{Deserialize, Serialize};

/// A user record.
///
/// The email address is the identity: it is the sole partition key in the
/// backing table, and at most one record exists per email value. The
/// remaining attributes carry no validation of their own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    /// Email address, the unique identity of the record.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl User {
    /// Create a record from its three attributes.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Returns `true` if this record carries an identity.
    ///
    /// A fetch for a missing key yields a zero-valued record; an empty email
    /// is how "not found" is represented on the wire.
    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.email.is_empty()
    }
}

/// Error body returned to callers on failure.
///
/// Serializes as `{"error": "<message>"}`; the field is omitted entirely
/// when no message is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Create an error body carrying a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }
}
