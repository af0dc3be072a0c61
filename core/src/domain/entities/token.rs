//! Claims carried by the signed session token.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::user::Identity;

/// Session token lifetime (3 hours)
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 3 * 60 * 60;

/// Claims structure for the JWT payload: `{ user, iat, exp }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Sanitized user payload
    pub user: Identity,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl TokenClaims {
    /// Creates claims issued at `now` and valid for `ttl`
    pub fn new(user: Identity, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            user,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// A token stays valid while `now` is strictly before `exp`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
