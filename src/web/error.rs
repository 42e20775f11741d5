// Error types for the relay API

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Relay error types.
///
/// Every variant maps to a status code and a client-safe message. Detail that
/// could expose provider internals is logged server-side and never placed in
/// a response body.
#[derive(Debug)]
pub enum ApiError {
    /// The request did not carry a usable upload (not multipart, missing or
    /// empty `file` field).
    BadRequest(String),
    /// No provider API key is configured on this server.
    MissingApiKey,
    /// The provider refused or failed to process the image.
    RemovalFailed,
    /// Unexpected failure inside the relay. The payload is log-only.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Missing API key".to_string(),
            ),
            Self::RemovalFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to remove background".to_string(),
            ),
            Self::Internal(detail) => {
                tracing::error!("Internal relay error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));

        (status, body).into_response()
    }
}
