//! The store trait the repository operates against.

use async_trait::async_trait;

use userdir_model::User;

use crate::error::StoreError;

/// Key-value store holding user records keyed by email.
///
/// This trait is the boundary between the repository operations and the
/// managed store. Production code binds it to DynamoDB via
/// [`DynamoStore`](crate::DynamoStore); tests substitute
/// [`MemoryStore`](crate::MemoryStore).
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Strongly-consistent read of one record by email.
    ///
    /// Returns `Ok(None)` when no record exists at that key.
    async fn get(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Unbounded scan of the whole table, in store order.
    async fn scan(&self) -> Result<Vec<User>, StoreError>;

    /// Write a record only if no record with the same email exists.
    ///
    /// The existence predicate is evaluated by the store at apply time; a
    /// record appearing concurrently fails with
    /// [`StoreError::ConditionFailed`].
    async fn put_new(&self, user: &User) -> Result<(), StoreError>;

    /// Write a record unconditionally, replacing any existing one.
    async fn put(&self, user: &User) -> Result<(), StoreError>;

    /// Delete a record only if it exists.
    ///
    /// An absent record fails with [`StoreError::ConditionFailed`].
    async fn delete_existing(&self, email: &str) -> Result<(), StoreError>;
}
