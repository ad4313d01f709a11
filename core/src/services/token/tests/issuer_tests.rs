//! Unit tests for the token issuer and signing keys

use chrono::{Duration, TimeZone, Utc};

use super::{alice, SECRET};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{JwtKeys, TokenConfig, TokenIssuer};

#[test]
fn test_issue_signs_claims_for_identity() {
    let issuer = TokenIssuer::new(TokenConfig::with_secret(SECRET, 3_600)).unwrap();
    let identity = alice();
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();

    let issued = issuer.issue_at(&identity, now).unwrap();

    assert_eq!(issued.token.split('.').count(), 3);
    assert_eq!(issued.claims.sub, identity.id.to_string());
    assert_eq!(issued.claims.exp, (now + Duration::hours(1)).timestamp());

    let decoded = issuer.keys().decode(&issued.token).unwrap();
    assert_eq!(decoded, issued.claims);
}

#[test]
fn test_two_tokens_in_same_second_differ() {
    let issuer = TokenIssuer::new(TokenConfig::with_secret(SECRET, 3_600)).unwrap();
    let identity = alice();
    let now = Utc::now();

    let first = issuer.issue_at(&identity, now).unwrap();
    let second = issuer.issue_at(&identity, now).unwrap();
    assert_ne!(first.token, second.token);
}

#[test]
fn test_empty_secret_is_fatal() {
    let result = TokenIssuer::new(TokenConfig::with_secret("", 3_600));
    assert!(matches!(result, Err(DomainError::Internal { .. })));
}

#[test]
fn test_production_rejects_default_and_short_secrets() {
    let mut config = TokenConfig::default();
    config.production = true;
    assert!(JwtKeys::new(&config).is_err());

    config.jwt_secret = "short-secret".to_string();
    assert!(JwtKeys::new(&config).is_err());

    config.jwt_secret = SECRET.to_string();
    assert!(JwtKeys::new(&config).is_ok());
}

#[test]
fn test_tampered_payload_fails_signature() {
    let issuer = TokenIssuer::new(TokenConfig::with_secret(SECRET, 3_600)).unwrap();
    let issued = issuer.issue(&alice()).unwrap();
    let other = issuer.issue(&alice()).unwrap();

    // splice the payload of one token onto the signature of another
    let parts: Vec<&str> = issued.token.split('.').collect();
    let other_parts: Vec<&str> = other.token.split('.').collect();
    let forged = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

    assert_eq!(
        issuer.keys().decode(&forged),
        Err(TokenError::malformed("invalid signature"))
    );
}

#[test]
fn test_wrong_audience_is_malformed() {
    let issuer = TokenIssuer::new(TokenConfig::with_secret(SECRET, 3_600)).unwrap();
    let mut other_config = TokenConfig::with_secret(SECRET, 3_600);
    other_config.audience = "some-other-api".to_string();
    let other = TokenIssuer::new(other_config).unwrap();

    let token = other.issue(&alice()).unwrap().token;
    assert_eq!(
        issuer.keys().decode(&token),
        Err(TokenError::malformed("wrong audience"))
    );
}

#[test]
fn test_revocation_policy_follows_ttl() {
    let issuer = TokenIssuer::new(TokenConfig::with_secret(SECRET, 3_600)).unwrap();
    let now = Utc::now();
    let issued = issuer.issue_at(&alice(), now).unwrap();

    let purge_after = issuer
        .revocation_policy()
        .purge_after(issued.claims.expires_at(), now)
        .unwrap();
    assert!(purge_after >= issued.claims.expires_at());
}

#[test]
fn test_oversized_lifetime_is_fatal_at_construction() {
    let result = TokenIssuer::new(TokenConfig::with_secret(SECRET, 1_000_000_000_000_000));
    assert!(matches!(result, Err(DomainError::Internal { .. })));

    let mut config = TokenConfig::with_secret(SECRET, 3_600);
    config.leeway_seconds = i64::MAX;
    assert!(TokenIssuer::new(config).is_err());
}

#[test]
fn test_issue_past_calendar_end_fails_without_panicking() {
    let issuer = TokenIssuer::new(TokenConfig::with_secret(SECRET, 3_600)).unwrap();
    let near_end = chrono::DateTime::<Utc>::MAX_UTC - Duration::minutes(1);

    assert_eq!(
        issuer.issue_at(&alice(), near_end).unwrap_err(),
        DomainError::Token(TokenError::TokenGenerationFailed)
    );
}
