//! Configuration for the token service

use chrono::Duration;
use jsonwebtoken::Algorithm;
use vb_shared::JwtConfig;

use crate::domain::entities::token::DEFAULT_TOKEN_TTL_SECONDS;
use crate::errors::DomainError;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm (HMAC family only)
    pub algorithm: Algorithm,
    /// Token lifetime in seconds
    pub token_ttl_seconds: i64,
}

impl TokenServiceConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
        }
    }

    /// Builds the service configuration from the shared JWT settings
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, DomainError> {
        if config.secret.is_empty() {
            return Err(DomainError::Internal {
                message: "JWT secret must not be empty".to_string(),
            });
        }
        if config.token_expiry_seconds <= 0 {
            return Err(DomainError::Internal {
                message: format!("invalid token expiry: {}", config.token_expiry_seconds),
            });
        }

        Ok(Self {
            jwt_secret: config.secret.clone(),
            algorithm: parse_algorithm(&config.algorithm)?,
            token_ttl_seconds: config.token_expiry_seconds,
        })
    }

    pub fn ttl(&self) -> Duration {
        Duration::seconds(self.token_ttl_seconds)
    }
}

fn parse_algorithm(name: &str) -> Result<Algorithm, DomainError> {
    match name.trim().to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(DomainError::Internal {
            message: format!("unsupported JWT algorithm: {}", other),
        }),
    }
}
