//! Request-level error type and its HTTP mapping.
//!
//! Validation failures map to 422 with the offending field; storage and
//! unexpected failures map to 500. Responses carry a generic localized
//! message; internal detail goes to the logs only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use standeal_core::ValidationError;
use storage::StorageError;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(err) => {
                warn!(error = %err, field = err.field(), "Rejected invalid submission");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({
                        "error": "Date de intrare invalide",
                        "field": err.field(),
                    })),
                )
                    .into_response()
            }
            ApiError::Storage(err) => {
                error!(error = %err, "Storage operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Eroare internă la procesarea cererii" })),
                )
                    .into_response()
            }
            ApiError::Unexpected(msg) => {
                error!(error = %msg, "Unexpected error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Eroare internă la procesarea cererii" })),
                )
                    .into_response()
            }
        }
    }
}
