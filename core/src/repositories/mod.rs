//! Repository interfaces for persistence, with in-memory implementations.

pub mod user;
pub mod vacation;

pub use user::{MockUserRepository, UserRepository};
pub use vacation::{MockVacationRepository, VacationRepository};
