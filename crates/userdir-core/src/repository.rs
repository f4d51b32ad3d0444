//! The four user repository operations.

use userdir_model::{User, UserError, UserErrorKind, UserResult, is_valid_email};

use crate::error::StoreError;
use crate::store::UserStore;

/// The CRUD operations over a [`UserStore`].
///
/// Holds the injected store; no other state. Each operation performs at most
/// one validating read plus one write.
#[derive(Debug)]
pub struct UserRepository<S> {
    store: S,
}

impl<S> UserRepository<S> {
    /// Create a repository over a store.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: UserStore> UserRepository<S> {
    /// Fetch one record by email.
    ///
    /// A missing record yields a zero-valued `User` rather than an error;
    /// callers treat an empty identity as "not found".
    pub async fn fetch_user(&self, email: &str) -> UserResult<User> {
        match self.store.get(email).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Ok(User::default()),
            Err(e) => Err(fetch_error(e)),
        }
    }

    /// Fetch every record in the table, in store order.
    pub async fn fetch_users(&self) -> UserResult<Vec<User>> {
        self.store.scan().await.map_err(fetch_error)
    }

    /// Create a record from a JSON body.
    ///
    /// Email syntax is validated before any store access. The existence
    /// pre-check gives the friendlier "already exists" message; the
    /// conditional write is the guard that holds under races.
    pub async fn create_user(&self, body: &[u8]) -> UserResult<User> {
        let user: User = serde_json::from_slice(body).map_err(UserError::invalid_user_data)?;

        if !is_valid_email(&user.email) {
            return Err(UserError::invalid_email());
        }

        if let Ok(Some(current)) = self.store.get(&user.email).await {
            if current.is_present() {
                return Err(UserError::already_exists());
            }
        }

        self.store
            .put_new(&user)
            .await
            .map_err(|e| write_error(e, UserErrorKind::PutFailed))?;

        Ok(user)
    }

    /// Replace a record wholesale from a JSON body.
    ///
    /// The existence check is advisory only; the write itself is
    /// unconditional, so concurrent updates are last-writer-wins.
    pub async fn update_user(&self, body: &[u8]) -> UserResult<User> {
        let user: User = serde_json::from_slice(body).map_err(UserError::invalid_user_data)?;

        if let Ok(current) = self.store.get(&user.email).await {
            if !current.is_some_and(|u| u.is_present()) {
                return Err(UserError::does_not_exist());
            }
        }

        self.store
            .put(&user)
            .await
            .map_err(|e| write_error(e, UserErrorKind::PutFailed))?;

        Ok(user)
    }

    /// Delete the record with the given email.
    ///
    /// An empty email is rejected locally; no store call is issued for it.
    /// A missing record and a store failure share one wire message.
    pub async fn delete_user(&self, email: &str) -> UserResult<()> {
        if email.is_empty() {
            return Err(UserError::new(UserErrorKind::DeleteFailed));
        }

        self.store
            .delete_existing(email)
            .await
            .map_err(|e| write_error(e, UserErrorKind::DeleteFailed))
    }
}

/// Map a read-path store failure onto the wire taxonomy.
fn fetch_error(e: StoreError) -> UserError {
    match e {
        StoreError::Decode(_) => UserError::new(UserErrorKind::UnmarshalFailed).with_source(e),
        _ => UserError::new(UserErrorKind::FetchFailed).with_source(e),
    }
}

/// Map a write-path store failure onto the wire taxonomy.
fn write_error(e: StoreError, kind: UserErrorKind) -> UserError {
    match e {
        // A lost condition carries no cause worth chaining.
        StoreError::ConditionFailed => UserError::new(kind),
        _ => UserError::new(kind).with_source(e),
    }
}
