//! Unit tests for revocation entries and the purge policy

use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::entities::revocation::RevocationPolicy;
use crate::domain::entities::token::{token_identifier, Claims, JWT_AUDIENCE, JWT_ISSUER};
use crate::domain::entities::user::UserProfile;
use crate::errors::TokenError;

#[test]
fn test_purge_after_covers_token_expiry() {
    let policy = RevocationPolicy::new(86_400, 0);
    let issued = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    let exp = issued + Duration::hours(24);

    // logged out one hour after issue
    let revoked_at = issued + Duration::hours(1);
    let purge_after = policy.purge_after(exp, revoked_at).unwrap();

    assert!(purge_after >= exp);
    assert_eq!(purge_after, revoked_at + Duration::hours(24));
}

#[test]
fn test_purge_after_respects_longer_token_and_leeway() {
    // a token minted under a longer TTL than the current one
    let policy = RevocationPolicy::new(3_600, 30);
    let revoked_at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    let exp = revoked_at + Duration::hours(10);

    let purge_after = policy.purge_after(exp, revoked_at).unwrap();
    assert_eq!(purge_after, exp + Duration::seconds(30));
}

#[test]
fn test_entry_for_token() {
    let policy = RevocationPolicy::new(86_400, 0);
    let identity = UserProfile {
        id: Uuid::new_v4(),
        email: "alice@example.com".to_string(),
        name: "Alice".to_string(),
    };
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    let claims = Claims::for_identity(&identity, now, Duration::hours(24), JWT_ISSUER, JWT_AUDIENCE).unwrap();

    let entry = policy.entry_for("header.payload.signature", &claims, identity.id, now).unwrap();

    assert_eq!(entry.token_hash, token_identifier("header.payload.signature"));
    assert_eq!(entry.user_id, identity.id);
    assert_eq!(entry.revoked_at, now);
    assert!(!entry.is_purgeable_at(claims.expires_at()));
    assert!(entry.is_purgeable_at(claims.expires_at() + Duration::seconds(1)));
}

#[test]
fn test_purge_after_out_of_calendar_range_is_an_error() {
    let policy = RevocationPolicy::new(86_400, 60);
    let revoked_at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();

    assert_eq!(
        policy.purge_after(chrono::DateTime::<Utc>::MAX_UTC, revoked_at),
        Err(TokenError::TokenGenerationFailed)
    );

    let unbounded = RevocationPolicy::new(i64::MAX, 0);
    assert_eq!(
        unbounded.purge_after(revoked_at, revoked_at),
        Err(TokenError::TokenGenerationFailed)
    );
}
