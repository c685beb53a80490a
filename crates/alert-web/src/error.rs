//! Error types for the alert web interface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use nearby_alert::AlertCheckError;
use thiserror::Error;

/// Errors returned by alert web handlers.
#[derive(Debug, Error)]
pub enum WebError {
    /// The request could not be used.
    #[error("{0}")]
    BadRequest(String),

    /// No assessment could be produced.
    #[error("no assessment available: {0}")]
    Unavailable(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AlertCheckError> for WebError {
    fn from(err: AlertCheckError) -> Self {
        match err {
            AlertCheckError::InvalidInput(msg) => WebError::BadRequest(msg),
            AlertCheckError::Configuration(msg) => WebError::Internal(msg),
            other => WebError::Unavailable(other.to_string()),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            WebError::BadRequest(msg) => {
                tracing::debug!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg }))
            }
            WebError::Unavailable(reason) => (
                StatusCode::SERVICE_UNAVAILABLE,
                serde_json::json!({
                    "error": "no assessment available",
                    "reason": reason
                }),
            ),
            WebError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": msg }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for handlers.
pub type Result<T> = std::result::Result<T, WebError>;
