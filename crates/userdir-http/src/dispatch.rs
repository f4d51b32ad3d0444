//! Method routing and operation dispatch.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use userdir_core::{UserRepository, UserStore};
use userdir_model::{UserError, UserResult};

use crate::request::ApiRequest;
use crate::response::{ERROR_METHOD_NOT_ALLOWED, deleted_response, error_response, json_response};

/// Dispatches inbound requests to the repository operations.
///
/// Exactly one operation runs per request, bounded by the configured
/// deadline. Every outcome renders as a well-formed response: 200/201 on
/// success, 400 with an error body on any domain failure, 405 for an
/// unmatched method. Nothing from this layer maps to 5xx.
#[derive(Debug)]
pub struct UserApiService<S> {
    repo: Arc<UserRepository<S>>,
    operation_timeout: Duration,
}

impl<S> Clone for UserApiService<S> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            operation_timeout: self.operation_timeout,
        }
    }
}

impl<S: UserStore> UserApiService<S> {
    /// Create a service over a repository with a per-operation deadline.
    #[must_use]
    pub fn new(repo: UserRepository<S>, operation_timeout: Duration) -> Self {
        Self {
            repo: Arc::new(repo),
            operation_timeout,
        }
    }

    /// Route a request to its operation and render the response.
    pub async fn handle(&self, req: ApiRequest) -> http::Response<String> {
        tracing::debug!(method = %req.method, "dispatching user request");

        match req.method {
            http::Method::GET => self.get_user(&req).await,
            http::Method::POST => self.create_user(&req).await,
            http::Method::PUT => self.update_user(&req).await,
            http::Method::DELETE => self.delete_user(&req).await,
            _ => error_response(
                http::StatusCode::METHOD_NOT_ALLOWED,
                ERROR_METHOD_NOT_ALLOWED,
            ),
        }
    }

    async fn get_user(&self, req: &ApiRequest) -> http::Response<String> {
        match req.query_param("email") {
            Some(email) if !email.is_empty() => {
                match self.bounded(self.repo.fetch_user(email)).await {
                    Ok(user) => json_response(http::StatusCode::OK, &user),
                    Err(e) => fail(&e),
                }
            }
            _ => match self.bounded(self.repo.fetch_users()).await {
                Ok(users) => json_response(http::StatusCode::OK, &users),
                Err(e) => fail(&e),
            },
        }
    }

    async fn create_user(&self, req: &ApiRequest) -> http::Response<String> {
        match self.bounded(self.repo.create_user(&req.body)).await {
            Ok(user) => json_response(http::StatusCode::CREATED, &user),
            Err(e) => fail(&e),
        }
    }

    async fn update_user(&self, req: &ApiRequest) -> http::Response<String> {
        match self.bounded(self.repo.update_user(&req.body)).await {
            Ok(user) => json_response(http::StatusCode::OK, &user),
            Err(e) => fail(&e),
        }
    }

    async fn delete_user(&self, req: &ApiRequest) -> http::Response<String> {
        let email = req.query_param("email").unwrap_or_default();
        match self.bounded(self.repo.delete_user(email)).await {
            Ok(()) => deleted_response(),
            Err(e) => fail(&e),
        }
    }

    /// Run an operation under the per-call deadline.
    async fn bounded<T>(&self, op: impl Future<Output = UserResult<T>>) -> UserResult<T> {
        tokio::time::timeout(self.operation_timeout, op)
            .await
            .unwrap_or_else(|_| Err(UserError::timeout()))
    }
}

/// Render a domain failure. All of them are client-correctable (400).
fn fail(e: &UserError) -> http::Response<String> {
    tracing::warn!(error = %e, "user operation failed");
    error_response(http::StatusCode::BAD_REQUEST, e.to_string())
}
