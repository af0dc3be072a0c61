//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing and credential hashing configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server and public URL configuration
//!
//! Every sub-configuration exposes `from_env()` for the binary and
//! `from_lookup()` so tests can feed values without touching the process
//! environment.

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, HashingConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;

/// Errors raised while loading configuration at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVariable(&'static str),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            environment: Environment::from_lookup(&lookup),
            server: ServerConfig::from_lookup(&lookup)?,
            database: DatabaseConfig::from_lookup(&lookup)?,
            auth: AuthConfig::from_lookup(&lookup)?,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

/// Parses an optional variable, falling back to `default` when unset
pub(crate) fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => Ok(default),
    }
}
