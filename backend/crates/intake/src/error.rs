//! Intake Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Intake-specific result type alias
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Intake-specific error variants
#[derive(Debug, Error)]
pub enum IntakeError {
    /// Record does not exist (admin review of an unknown id)
    #[error("Record not found")]
    NotFound,

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

impl IntakeError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            IntakeError::NotFound => ErrorKind::NotFound,
            IntakeError::Validation(e) => e.kind(),
            IntakeError::Database(_) | IntakeError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            IntakeError::Validation(e) => e,
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            IntakeError::Database(e) => {
                tracing::error!(error = %e, "Intake database error");
            }
            IntakeError::Internal(msg) => {
                tracing::error!(message = %msg, "Intake internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Intake error");
            }
        }
    }
}

impl IntoResponse for IntakeError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for IntakeError {
    fn from(err: AppError) -> Self {
        IntakeError::Validation(err)
    }
}
