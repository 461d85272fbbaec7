//! Domain-specific error types and error handling.

mod types;


pub use types::{AppointmentError, ErrorKind, VerificationError};

use mc_shared::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Appointment(#[from] AppointmentError),

    #[error(transparent)]
    Verification(#[from] VerificationError),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation { .. } => ErrorKind::Validation,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::Appointment(e) => e.kind(),
            DomainError::Verification(e) => e.kind(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => error_codes::VALIDATION_ERROR,
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Appointment(e) => e.error_code(),
            DomainError::Verification(e) => e.error_code(),
        }
    }

    pub(crate) fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }
}

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self) -> ErrorResponse {
        // Internal details stay in the logs
        let message = match self {
            DomainError::Internal { .. } => "Internal server error".to_string(),
            other => other.to_string(),
        };
        ErrorResponse::new(self.error_code(), message)
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(error: DomainError) -> Self {
        error.to_error_response()
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
