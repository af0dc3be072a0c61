pub mod auth;
pub mod cors;

pub use auth::{authenticate, extract_bearer_token, AuthContext, RequireAdmin, RequireAuth};
pub use cors::create_cors;
