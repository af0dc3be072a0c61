//! Authentication session value object returned after register/login.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::Identity;

/// A freshly issued session token together with the identity it carries
///
/// The identity never includes the password digest, so the whole value can
/// be sent back to the client as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthSession {
    /// Signed session token
    pub token: String,

    /// Sanitized user payload embedded in the token
    pub user: Identity,
}

impl AuthSession {
    pub fn new(token: String, user: Identity) -> Self {
        Self { token, user }
    }
}
