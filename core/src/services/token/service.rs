//! Main token service implementation

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, error};

use crate::domain::entities::token::TokenClaims;
use crate::domain::entities::user::Identity;
use crate::errors::TokenError;

use super::config::TokenServiceConfig;

/// Service for issuing and checking signed session tokens
///
/// Stateless: nothing is stored server-side, so any instance configured with
/// the same secret accepts the tokens of any other.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        // Expiry is checked against an explicit clock in `validate`.
        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            header: Header::new(config.algorithm),
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Issues a token for `identity`, expiring one TTL from now
    pub fn issue(&self, identity: &Identity) -> Result<String, TokenError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issues a token as if the current time were `now`
    pub fn issue_at(&self, identity: &Identity, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = TokenClaims::new(identity.clone(), now, self.config.ttl());

        encode(&self.header, &claims, &self.encoding_key).map_err(|e| {
            error!("Failed to sign token for user {}: {}", identity.id, e);
            TokenError::GenerationFailed
        })
    }

    /// True iff the token is well formed, correctly signed and unexpired
    pub fn verify(&self, token: &str) -> bool {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> bool {
        self.validate(token, now).is_ok()
    }

    /// Returns the embedded identity, or `None` when the token does not verify
    pub fn decode(&self, token: &str) -> Option<Identity> {
        self.decode_at(token, Utc::now())
    }

    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Option<Identity> {
        self.validate(token, now).ok().map(|claims| claims.user)
    }

    /// Full check of a token against the clock `now`
    pub fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, TokenError> {
        if token.trim().is_empty() {
            debug!("Token rejected: empty");
            return Err(TokenError::Malformed);
        }

        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            let err = match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            };
            debug!("Token rejected: {} ({})", err, e);
            err
        })?;

        if data.claims.is_expired_at(now) {
            debug!("Token rejected: expired at {}", data.claims.exp);
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }
}
