//! The HTTP-shaped inbound request.

use std::collections::HashMap;

use bytes::Bytes;

/// An inbound request as the dispatcher sees it: a method, the query
/// parameters, and the raw body. The transport adapter (Lambda, a test)
/// builds one of these; nothing transport-specific crosses this boundary.
#[derive(Debug, Clone, Default)]
pub struct ApiRequest {
    /// HTTP method the caller used.
    pub method: http::Method,
    /// Query string parameters.
    pub query: HashMap<String, String>,
    /// Raw request body; expected JSON for POST/PUT.
    pub body: Bytes,
}

impl ApiRequest {
    /// Create a request with the given method and no query or body.
    #[must_use]
    pub fn new(method: http::Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Add a query parameter.
    #[must_use]
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Set the request body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Look up a query parameter by name.
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}
