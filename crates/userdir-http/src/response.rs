//! Response rendering.

use serde::Serialize;

use userdir_model::ErrorBody;

/// Content type for all responses.
pub const CONTENT_TYPE: &str = "application/json";

/// Fixed message for an unmatched HTTP method.
pub const ERROR_METHOD_NOT_ALLOWED: &str = "method not allowed";

/// Render a value as a JSON response with the given status.
#[must_use]
pub fn json_response<T: Serialize>(status: http::StatusCode, value: &T) -> http::Response<String> {
    let body = serde_json::to_string(value).expect("JSON serialization of response cannot fail");

    http::Response::builder()
        .status(status)
        .header("content-type", CONTENT_TYPE)
        .body(body)
        .expect("valid JSON response")
}

/// Render a failure message as an error-body response with the given status.
#[must_use]
pub fn error_response(status: http::StatusCode, message: impl Into<String>) -> http::Response<String> {
    json_response(status, &ErrorBody::new(message))
}

/// The fixed acknowledgement returned by a successful delete.
#[must_use]
pub(crate) fn deleted_response() -> http::Response<String> {
    json_response(
        http::StatusCode::OK,
        &serde_json::json!({"status": "deleted"}),
    )
}
