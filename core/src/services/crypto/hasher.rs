//! Salted HMAC-SHA512 password digests

use std::fmt;

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use vb_shared::HashingConfig;

use crate::errors::DomainError;

type HmacSha512 = Hmac<Sha512>;

/// Deterministic one-way transform from plaintext password to stored digest
///
/// The MAC is keyed once with the process-wide salt; each call to [`hash`]
/// works on a clone of that keyed state, so the hasher is immutable and can be
/// shared across workers behind an `Arc`.
///
/// [`hash`]: CredentialHasher::hash
#[derive(Clone)]
pub struct CredentialHasher {
    keyed: HmacSha512,
}

impl CredentialHasher {
    /// Builds a hasher from configuration
    pub fn new(config: &HashingConfig) -> Result<Self, DomainError> {
        Self::from_salt(&config.salt)
    }

    pub fn from_salt(salt: &str) -> Result<Self, DomainError> {
        if salt.is_empty() {
            return Err(DomainError::Internal {
                message: "hashing salt must not be empty".to_string(),
            });
        }

        let keyed = HmacSha512::new_from_slice(salt.as_bytes()).map_err(|e| DomainError::Internal {
            message: format!("failed to key credential hasher: {}", e),
        })?;

        Ok(Self { keyed })
    }

    /// Hex encoded HMAC-SHA512 digest of `plaintext` (128 characters)
    pub fn hash(&self, plaintext: &str) -> String {
        let mut mac = self.keyed.clone();
        mac.update(plaintext.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Constant-time comparison of `plaintext` against a stored digest
    pub fn matches(&self, plaintext: &str, digest: &str) -> bool {
        constant_time_eq(self.hash(plaintext).as_bytes(), digest.as_bytes())
    }
}

impl fmt::Debug for CredentialHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialHasher").finish_non_exhaustive()
    }
}
