use tracing::warn;

use crate::domain::entities::user::{Identity, Role};
use crate::errors::AuthError;

/// Pure authorization rules over an [`Identity`]
///
/// Role normalization (`1` vs `"1"`) happens when the identity is
/// deserialized, so the comparisons here are on the closed [`Role`] enum.
#[derive(Debug, Clone, Copy, Default)]
pub struct RolePolicy;

impl RolePolicy {
    pub fn is_authenticated(identity: Option<&Identity>) -> bool {
        identity.is_some()
    }

    /// True iff the identity carries the admin role
    pub fn is_admin(identity: &Identity) -> bool {
        identity.role == Role::Admin
    }

    /// Admin gate used by the authorization middleware
    pub fn authorize_admin(identity: &Identity) -> Result<(), AuthError> {
        if Self::is_admin(identity) {
            Ok(())
        } else {
            warn!("User {} denied admin access", identity.id);
            Err(AuthError::NotAuthorized)
        }
    }
}
