//! Donation Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Donation-specific result type alias
pub type DonationResult<T> = Result<T, DonationError>;

/// Donation-specific error variants
#[derive(Debug, Error)]
pub enum DonationError {
    /// Referenced program does not exist or is inactive
    #[error("Unknown or inactive program")]
    ProgramInvalid,

    /// Input validation error (carries field detail)
    #[error("{0}")]
    Validation(AppError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DonationError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DonationError::ProgramInvalid => ErrorKind::BadRequest,
            DonationError::Validation(e) => e.kind(),
            DonationError::Database(_) | DonationError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            DonationError::Validation(e) => e,
            DonationError::ProgramInvalid => {
                AppError::bad_request("Unknown or inactive program").with_field("programId")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            DonationError::Database(e) => {
                tracing::error!(error = %e, "Donation database error");
            }
            DonationError::Internal(msg) => {
                tracing::error!(message = %msg, "Donation internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Donation error");
            }
        }
    }
}

impl IntoResponse for DonationError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for DonationError {
    fn from(err: AppError) -> Self {
        DonationError::Validation(err)
    }
}
