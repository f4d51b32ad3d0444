//! Error type for store implementations.

/// A failure reported by a [`UserStore`](crate::UserStore) implementation.
///
/// The repository flattens these into the fixed wire messages; the condition
/// variant is what distinguishes a lost conditional write from a transport
/// failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or rejected the request outright.
    #[error("store request failed")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A conditional write or delete found its predicate false at apply time.
    #[error("store condition failed")]
    ConditionFailed,

    /// A stored item could not be decoded into a user record.
    #[error("could not decode item: {0}")]
    Decode(String),
}

impl StoreError {
    /// Wrap a transport-level failure.
    #[must_use]
    pub fn request(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Request(Box::new(source))
    }
}
