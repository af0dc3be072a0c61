//! Authentication configuration: token signing and credential hashing

use serde::{Deserialize, Serialize};

use super::{parse_or, ConfigError};

/// Default token lifetime: 3 hours
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 3 * 60 * 60;

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens, identical on every instance
    pub secret: String,

    /// Token expiry time in seconds
    #[serde(default = "default_token_expiry")]
    pub token_expiry_seconds: i64,

    /// Algorithm for JWT signing (HS256, HS384 or HS512)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl JwtConfig {
    /// Create a new JWT configuration with secret and default lifetime
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_expiry_seconds: default_token_expiry(),
            algorithm: default_algorithm(),
        }
    }

    /// Set token expiry in minutes
    pub fn with_expiry_minutes(mut self, minutes: i64) -> Self {
        self.token_expiry_seconds = minutes * 60;
        self
    }

    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }
}

/// Credential hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HashingConfig {
    /// Process-wide salt keying the password HMAC
    pub salt: String,
}

impl HashingConfig {
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Password hashing configuration
    pub hashing: HashingConfig,
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// `JWT_SECRET` and `HASHING_SALT` are required; there is no built-in
    /// fallback secret.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = required(lookup, "JWT_SECRET")?;
        let salt = required(lookup, "HASHING_SALT")?;
        let token_expiry_seconds =
            parse_or(lookup, "JWT_TOKEN_EXPIRY", DEFAULT_TOKEN_EXPIRY_SECONDS)?;
        if token_expiry_seconds <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "JWT_TOKEN_EXPIRY",
                value: token_expiry_seconds.to_string(),
            });
        }
        let algorithm = lookup("JWT_ALGORITHM").unwrap_or_else(default_algorithm);

        Ok(Self {
            jwt: JwtConfig {
                secret,
                token_expiry_seconds,
                algorithm,
            },
            hashing: HashingConfig { salt },
        })
    }

    pub fn new(jwt: JwtConfig, hashing: HashingConfig) -> Self {
        Self { jwt, hashing }
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::MissingVariable(key))
}

fn default_algorithm() -> String {
    String::from("HS256")
}

fn default_token_expiry() -> i64 {
    DEFAULT_TOKEN_EXPIRY_SECONDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_defaults() {
        let config = JwtConfig::new("my-secret");
        assert_eq!(config.token_expiry_seconds, 10_800);
        assert_eq!(config.algorithm, "HS256");
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret")
            .with_expiry_minutes(30)
            .with_algorithm("HS512");

        assert_eq!(config.token_expiry_seconds, 1800);
        assert_eq!(config.algorithm, "HS512");
    }

    #[test]
    fn test_missing_salt_is_an_error() {
        let lookup = |key: &str| match key {
            "JWT_SECRET" => Some("secret".to_string()),
            _ => None,
        };
        let result = AuthConfig::from_lookup(&lookup);
        assert_eq!(result.unwrap_err(), ConfigError::MissingVariable("HASHING_SALT"));
    }

    #[test]
    fn test_blank_secret_counts_as_missing() {
        let lookup = |key: &str| match key {
            "JWT_SECRET" => Some("   ".to_string()),
            "HASHING_SALT" => Some("salt".to_string()),
            _ => None,
        };
        let result = AuthConfig::from_lookup(&lookup);
        assert_eq!(result.unwrap_err(), ConfigError::MissingVariable("JWT_SECRET"));
    }

    #[test]
    fn test_non_positive_expiry_is_rejected() {
        let lookup = |key: &str| match key {
            "JWT_SECRET" => Some("secret".to_string()),
            "HASHING_SALT" => Some("salt".to_string()),
            "JWT_TOKEN_EXPIRY" => Some("0".to_string()),
            _ => None,
        };
        assert!(matches!(
            AuthConfig::from_lookup(&lookup),
            Err(ConfigError::InvalidValue { key: "JWT_TOKEN_EXPIRY", .. })
        ));
    }
}
