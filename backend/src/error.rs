//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.
//! Internal failure detail is logged, never returned to clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate resource: {0}")]
    Duplicate(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    ExpiredToken,

    #[error("Forbidden: {0}")]
    Authorization(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
///
/// Flat envelope returned for every failed request. `status` duplicates
/// the HTTP status code in the body so clients that only look at the
/// payload still see it.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub status: u16,
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            ApiError::Duplicate(msg) => (StatusCode::CONFLICT, "DUPLICATE_ERROR", msg.clone()),
            ApiError::Authentication(msg) => {
                (StatusCode::UNAUTHORIZED, "AUTHENTICATION_ERROR", msg.clone())
            }
            ApiError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "You are not authenticated".to_string(),
            ),
            ApiError::ExpiredToken => (
                StatusCode::UNAUTHORIZED,
                "EXPIRED_TOKEN",
                "You are not authenticated".to_string(),
            ),
            ApiError::Authorization(msg) => {
                (StatusCode::FORBIDDEN, "AUTHORIZATION_ERROR", msg.clone())
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            ApiError::Database(err) => {
                // Unique-constraint races surface as a duplicate, not a 500
                if let sqlx::Error::Database(db_err) = err {
                    if db_err.is_unique_violation() {
                        (
                            StatusCode::CONFLICT,
                            "DUPLICATE_ERROR",
                            "Resource already exists".to_string(),
                        )
                    } else {
                        error!("Database error: {:?}", err);
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "DATABASE_ERROR",
                            "A database error occurred".to_string(),
                        )
                    }
                } else {
                    error!("Database error: {:?}", err);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "DATABASE_ERROR",
                        "A database error occurred".to_string(),
                    )
                }
            }
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            status: status.as_u16(),
            code: code.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
