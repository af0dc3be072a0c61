//! Domain-specific error types and error handling.

mod types;


pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;
use vb_shared::error_codes;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{message}")]
    Validation { message: String },

    #[error("id {id} not found.")]
    NotFound { id: i64 },

    #[error("Nice try!")]
    ScriptInjection,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// HTTP status code the terminal error handler should use
    pub fn status_code(&self) -> u16 {
        match self {
            DomainError::Validation { .. } | DomainError::ValidationErr(_) => 400,
            DomainError::NotFound { .. } => 404,
            DomainError::ScriptInjection => 403,
            DomainError::Internal { .. } => 500,
            DomainError::Auth(err) => err.status_code(),
            DomainError::Token(TokenError::GenerationFailed) => 500,
            DomainError::Token(_) => 401,
        }
    }

    /// Machine readable code rendered in the error body
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } | DomainError::ValidationErr(_) => {
                error_codes::VALIDATION_ERROR
            }
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::ScriptInjection => error_codes::SCRIPT_INJECTION,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Auth(err) => err.error_code(),
            DomainError::Token(TokenError::GenerationFailed) => error_codes::INTERNAL_ERROR,
            DomainError::Token(_) => error_codes::UNAUTHORIZED,
        }
    }

    /// Message safe to show to clients; internal details are withheld
    pub fn client_message(&self) -> String {
        match self {
            DomainError::Internal { .. } | DomainError::Token(TokenError::GenerationFailed) => {
                "Some error occurred, please try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
