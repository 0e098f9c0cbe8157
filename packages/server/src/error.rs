//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested fragment does not exist
    #[error("fragment not found: {0}")]
    FragmentNotFound(Uuid),

    /// The generation backend failed
    #[error("generation backend failed: {0}")]
    Backend(String),

    /// Storage failure
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<seo_pipeline::SeoError> for ApiError {
    fn from(err: seo_pipeline::SeoError) -> Self {
        match err {
            seo_pipeline::SeoError::Backend(e) => ApiError::Backend(e.to_string()),
            other => ApiError::Storage(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::FragmentNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Backend(_) => StatusCode::BAD_GATEWAY,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::warn!(status = %status, error = %self, "request failed");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
