//! Error types for the portfolio advisor engine

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    // =============================
    // Client Errors
    // =============================

    /// Both `message` and `queryType` were absent or empty. Caught at the
    /// transport boundary; never reaches the classifier.
    #[error("Message or queryType is required")]
    InvalidRequest,

    // =============================
    // Internal Errors
    // =============================

    #[error("Provider error: {0}")]
    Provider(String),
}

impl IntoResponse for AdvisorError {
    fn into_response(self) -> Response {
        match self {
            AdvisorError::InvalidRequest => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "Message or queryType is required" })),
            )
                .into_response(),
            // Internal failures are logged with detail but surfaced opaque.
            AdvisorError::Provider(detail) => {
                error!("Internal error while serving request: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
