//! # Vacations Core
//!
//! Core business logic and domain layer for the Vacations backend.
//! This crate contains domain entities, the identity and access control
//! services (credential hashing, session tokens, role policy), the
//! user and vacation use-cases, repository interfaces and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
