//! Value objects returned by the domain services.

pub mod auth_session;

pub use auth_session::AuthSession;
