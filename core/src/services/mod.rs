//! Business services containing domain logic and use cases.

pub mod crypto;
pub mod policy;
pub mod token;
pub mod user;
pub mod vacation;

// Re-export commonly used types
pub use crypto::CredentialHasher;
pub use policy::RolePolicy;
pub use token::{TokenService, TokenServiceConfig};
pub use user::UserService;
pub use vacation::VacationService;
