//! HTTP-shaped request dispatch for the userdir service.
//!
//! This crate is the boundary between the invocation runtime and the
//! repository operations: it routes an inbound request by HTTP method,
//! bounds each operation with a deadline, and always renders a well-formed
//! response. It knows nothing about Lambda or any particular server; the
//! binary adapts its transport's request type into [`ApiRequest`].

mod dispatch;
mod request;
mod response;

pub use dispatch::UserApiService;
pub use request::ApiRequest;
pub use response::{CONTENT_TYPE, ERROR_METHOD_NOT_ALLOWED, error_response, json_response};
