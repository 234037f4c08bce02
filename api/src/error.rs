//! Unified error types for the Activities API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core roster business-rule errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
///
/// The messages are part of the observable contract: clients match on the
/// substrings "Activity not found", "already signed up" and "not signed up".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student already signed up for this activity")]
    AlreadySignedUp,

    #[error("Student not signed up for this activity")]
    NotSignedUp,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Domain(DomainError::ActivityNotFound) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::Domain(DomainError::AlreadySignedUp)
            | AppError::Domain(DomainError::NotSignedUp) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = Json(ErrorResponse { detail });

        (status, body).into_response()
    }
}
