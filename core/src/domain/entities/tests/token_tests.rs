//! Unit tests for token claims

use chrono::{Duration, TimeZone, Utc};

use crate::domain::entities::token::{TokenClaims, DEFAULT_TOKEN_TTL_SECONDS};
use crate::domain::entities::user::{Identity, Role};

fn identity() -> Identity {
    Identity {
        id: 1,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        role: Role::User,
    }
}

#[test]
fn test_default_ttl_is_three_hours() {
    assert_eq!(DEFAULT_TOKEN_TTL_SECONDS, 10_800);
}

#[test]
fn test_claims_expiry() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let ttl = Duration::seconds(DEFAULT_TOKEN_TTL_SECONDS);
    let claims = TokenClaims::new(identity(), now, ttl);

    assert_eq!(claims.exp - claims.iat, DEFAULT_TOKEN_TTL_SECONDS);
    assert!(!claims.is_expired_at(now));
    assert!(!claims.is_expired_at(now + ttl - Duration::seconds(1)));
    assert!(claims.is_expired_at(now + ttl));
    assert!(claims.is_expired_at(now + ttl + Duration::seconds(1)));
}

#[test]
fn test_claims_wire_shape() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let claims = TokenClaims::new(identity(), now, Duration::hours(3));
    let json = serde_json::to_value(&claims).unwrap();

    assert_eq!(json["user"]["email"], "ada@example.com");
    assert_eq!(json["iat"], now.timestamp());
    assert!(json.get("password").is_none());
}
