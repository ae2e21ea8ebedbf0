use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::location::LocationError;
use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("You cannot update the id field")]
    ImmutableId,

    #[error("User is already a guest")]
    AlreadyGuest,

    #[error("User is not a guest")]
    NotAGuest,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // A failed address lookup surfaces as a server fault, not a client
    // error, even though LocationError can tell an unresolvable address
    // apart from an unreachable geocoder.
    #[error("Geocoding error: {0}")]
    Geocoding(#[from] LocationError),

    #[error("Database error")]
    DatabaseError(#[from] sqlx::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ImmutableId
            | AppError::AlreadyGuest
            | AppError::NotAGuest
            | AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Geocoding(_) | AppError::DatabaseError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::ImmutableId => "IMMUTABLE_FIELD",
            AppError::AlreadyGuest => "ALREADY_GUEST",
            AppError::NotAGuest => "NOT_A_GUEST",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Geocoding(_) => "GEOCODING_ERROR",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::DatabaseError(e) => {
                error!(error = ?e, "Database error");
            }
            AppError::Geocoding(e) => {
                error!(error = ?e, "Location validation failed");
            }
            other => {
                error!(error = %other, code = other.code(), "Request failed");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        self.log();

        // Internal details stay in the logs.
        let public_message = match &self {
            AppError::DatabaseError(_) => "A database error occurred".to_string(),
            other => other.to_string(),
        };

        error_response(code, public_message, None, status)
    }
}
