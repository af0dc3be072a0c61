//! MySQL repository implementations

mod user_repository_impl;
mod vacation_repository_impl;

pub use user_repository_impl::MySqlUserRepository;
pub use vacation_repository_impl::MySqlVacationRepository;

use vb_core::errors::DomainError;

/// Wraps a database error with the operation that failed
pub(crate) fn db_error(context: &str, error: sqlx::Error) -> DomainError {
    tracing::error!("{}: {}", context, error);
    DomainError::Internal {
        message: format!("{}: {}", context, error),
    }
}
