//! Domain entities representing core business objects.

pub mod token;
pub mod user;
pub mod vacation;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use token::{TokenClaims, DEFAULT_TOKEN_TTL_SECONDS};
pub use user::{Credentials, Identity, NewUser, RegisterUser, Role, User};
pub use vacation::{LikedVacation, Vacation, VacationDraft};
