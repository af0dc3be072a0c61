//! Database module - MySQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management and schema bootstrap
//! - Repository implementations for users, vacations and likes

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{create_pool, DatabasePool, SCHEMA};
pub use mysql::{MySqlUserRepository, MySqlVacationRepository};
