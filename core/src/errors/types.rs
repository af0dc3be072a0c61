//! Error kinds raised by the identity, token and validation layers

use thiserror::Error;
use vb_shared::error_codes;

/// Authentication and authorization failures surfaced to clients
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No bearer credential on the request
    #[error("You must be logged in to access this page.")]
    MissingCredentials,

    /// Token present but failed verification (bad signature, expired)
    #[error("You are not logged in.")]
    NotLoggedIn,

    /// Token verified but its payload could not be decoded
    #[error("Invalid token.")]
    InvalidToken,

    /// Authenticated, but the role does not allow the operation
    #[error("You are not authorized.")]
    NotAuthorized,

    #[error("Incorrect email or password.")]
    IncorrectCredentials,

    #[error("Email is already taken")]
    EmailTaken,
}

impl AuthError {
    /// HTTP status code associated with the error
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::NotAuthorized => 403,
            AuthError::EmailTaken => 400,
            _ => 401,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::NotAuthorized => error_codes::FORBIDDEN,
            AuthError::EmailTaken => error_codes::EMAIL_TAKEN,
            AuthError::IncorrectCredentials => error_codes::INVALID_CREDENTIALS,
            _ => error_codes::UNAUTHORIZED,
        }
    }
}

/// Token-level failures; the token service converts all but
/// `GenerationFailed` into `false`/`None` before they leave it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Malformed token")]
    Malformed,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Input validation failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} is required")]
    RequiredField { field: &'static str },

    #[error("{field} must be between {min} and {max} characters")]
    InvalidLength {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least 4 characters and contain a capital letter")]
    WeakPassword,

    #[error("Start date must be after today")]
    StartDateNotInFuture,

    #[error("End date must be after start date")]
    EndBeforeStart,

    #[error("{field} must be greater than {min} and at most {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
}
