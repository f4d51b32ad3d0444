//! In-memory store for tests.

use async_trait::async_trait;
use dashmap::DashMap;

use userdir_model::User;

use crate::error::StoreError;
use crate::store::UserStore;

/// In-memory [`UserStore`] with the same conditional-write semantics as the
/// DynamoDB binding. Used to test the repository and dispatcher without a
/// live table.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: DashMap<String, User>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.items.get(email).map(|r| r.value().clone()))
    }

    async fn scan(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.items.iter().map(|r| r.value().clone()).collect())
    }

    async fn put_new(&self, user: &User) -> Result<(), StoreError> {
        // Entry API makes the check-and-insert atomic, like the store-side
        // attribute_not_exists condition.
        match self.items.entry(user.email.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => Err(StoreError::ConditionFailed),
            dashmap::mapref::entry::Entry::Vacant(e) => {
                e.insert(user.clone());
                Ok(())
            }
        }
    }

    async fn put(&self, user: &User) -> Result<(), StoreError> {
        self.items.insert(user.email.clone(), user.clone());
        Ok(())
    }

    async fn delete_existing(&self, email: &str) -> Result<(), StoreError> {
        self.items
            .remove(email)
            .map(|_| ())
            .ok_or(StoreError::ConditionFailed)
    }
}
