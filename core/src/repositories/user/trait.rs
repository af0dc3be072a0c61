//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and uses `Result` types for error handling; the
//! MySQL implementation lives in the infrastructure crate.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by login email
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with this email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Check whether an email is already registered
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError>;

    /// Persist a new user and return the assigned id
    ///
    /// Fails with `AuthError::EmailTaken` when the email is already in use.
    async fn insert(&self, user: NewUser) -> Result<i64, DomainError>;
}
