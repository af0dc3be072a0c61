//! Shared utilities and common types for the Vacations server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error response body shared by every API endpoint
//! - Validation helpers for user and vacation input

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, DatabaseConfig, Environment, HashingConfig, JwtConfig,
    ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use utils::validation;
