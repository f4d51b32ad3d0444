//! The error taxonomy surfaced to API callers.
//!
//! Every failure the service reports flattens to one of a fixed set of
//! messages; the underlying cause (an SDK error, a serde error) is kept as
//! the `source` for logs but never leaks into the wire message.

use std::fmt;

/// Boxed source error carried alongside a [`UserError`].
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The failure classes the API reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum UserErrorKind {
    /// Request body was not a valid user record.
    InvalidUserData,
    /// Email failed syntax validation.
    InvalidEmail,
    /// Create was attempted on an existing identity.
    AlreadyExists,
    /// Update was attempted on a missing identity.
    DoesNotExist,
    /// The store could not be read.
    FetchFailed,
    /// A stored item could not be decoded into a record.
    UnmarshalFailed,
    /// A record could not be encoded into a store item.
    MarshalFailed,
    /// The store rejected a write.
    PutFailed,
    /// The store rejected a delete, or the record was absent.
    DeleteFailed,
    /// The operation exceeded its deadline.
    Timeout,
}

impl UserErrorKind {
    /// Returns the fixed wire message for this failure class.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidUserData => "invalid user data",
            Self::InvalidEmail => "invalid email",
            Self::AlreadyExists => "user already exists",
            Self::DoesNotExist => "user does not exist",
            Self::FetchFailed => "failed to fetch record",
            Self::UnmarshalFailed => "failed to unmarshal record",
            Self::MarshalFailed => "could not marshal item",
            Self::PutFailed => "could not put item",
            Self::DeleteFailed => "could not delete item",
            Self::Timeout => "operation timed out",
        }
    }
}

impl fmt::Display for UserErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A failure reported by a repository operation.
#[derive(Debug)]
pub struct UserError {
    /// The failure class.
    pub kind: UserErrorKind,
    /// The underlying cause, if any.
    pub source: Option<BoxError>,
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.message())
    }
}

impl std::error::Error for UserError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<UserErrorKind> for UserError {
    fn from(kind: UserErrorKind) -> Self {
        Self::new(kind)
    }
}

impl UserError {
    /// Create an error from a failure class.
    #[must_use]
    pub fn new(kind: UserErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Attach the underlying cause.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // -- Convenience constructors --

    /// Request body was not a valid user record.
    #[must_use]
    pub fn invalid_user_data(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::new(UserErrorKind::InvalidUserData).with_source(source)
    }

    /// Email failed syntax validation.
    #[must_use]
    pub fn invalid_email() -> Self {
        Self::new(UserErrorKind::InvalidEmail)
    }

    /// Create was attempted on an existing identity.
    #[must_use]
    pub fn already_exists() -> Self {
        Self::new(UserErrorKind::AlreadyExists)
    }

    /// Update was attempted on a missing identity.
    #[must_use]
    pub fn does_not_exist() -> Self {
        Self::new(UserErrorKind::DoesNotExist)
    }

    /// The operation exceeded its deadline.
    #[must_use]
    pub fn timeout() -> Self {
        Self::new(UserErrorKind::Timeout)
    }
}

/// Convenience result type for repository operations.
pub type UserResult<T> = Result<T, UserError>;
