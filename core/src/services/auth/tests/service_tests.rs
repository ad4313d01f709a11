//! Unit tests for the authentication service

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::entities::audit::AuditEventType;
use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AuthError, DomainError, TokenError, ValidationError};
use crate::repositories::{
    MockAuditLogRepository, MockRevocationRepository, MockUserRepository, RevocationRepository,
    UserRepository,
};
use crate::services::audit::{AuditService, AuditServiceConfig};
use crate::services::auth::{AuthService, SignInInput, SignUpInput};
use crate::services::credentials::{BcryptPasswordHasher, PasswordHasher};
use crate::services::token::{SessionValidator, TokenConfig, TokenIssuer};

const SECRET: &str = "auth-service-test-secret-0123456789abcdef";

struct Harness {
    users: Arc<MockUserRepository>,
    revocations: Arc<MockRevocationRepository>,
    audit: Arc<MockAuditLogRepository>,
    service: AuthService<MockUserRepository, MockRevocationRepository, BcryptPasswordHasher, MockAuditLogRepository>,
    validator: SessionValidator<MockRevocationRepository>,
}

fn harness() -> Harness {
    let users = Arc::new(MockUserRepository::new());
    let revocations = Arc::new(MockRevocationRepository::new());
    let audit = Arc::new(MockAuditLogRepository::new());
    let issuer = TokenIssuer::new(TokenConfig::with_secret(SECRET, 86_400)).unwrap();
    let validator = SessionValidator::new(issuer.keys(), Arc::clone(&revocations), 0);
    let audit_service = Arc::new(AuditService::new(
        Arc::clone(&audit),
        AuditServiceConfig { async_writes: false },
    ));
    let service = AuthService::with_audit(
        Arc::clone(&users),
        Arc::clone(&revocations),
        Arc::new(BcryptPasswordHasher::new(4)),
        issuer,
        audit_service,
    );
    Harness {
        users,
        revocations,
        audit,
        service,
        validator,
    }
}

fn alice_sign_up() -> SignUpInput {
    SignUpInput {
        email: "alice@example.com".to_string(),
        name: "Alice".to_string(),
        password: "Password123!".to_string(),
    }
}

fn alice_sign_in(password: &str) -> SignInInput {
    SignInInput {
        email: "Alice@Example.com".to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_sign_up_then_profile_then_logout() {
    let h = harness();

    let response = h.service.sign_up(alice_sign_up()).await.unwrap();
    assert_eq!(response.user.email, "alice@example.com");
    assert_eq!(response.user.name, "Alice");

    let stored = h.users.find_by_email("alice@example.com").await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "Password123!");

    let session = h.validator.validate(Some(&response.access_token)).await.unwrap();
    let profile = h.service.profile(&session).await;
    assert_eq!(profile, response.user);

    h.service.logout(&session).await.unwrap();
    assert_eq!(h.revocations.count().await.unwrap(), 1);

    let rejection = h.validator.validate(Some(&response.access_token)).await.unwrap_err();
    assert_eq!(rejection.error, DomainError::Token(TokenError::RevokedToken));

    assert_eq!(h.audit.count_by_type(AuditEventType::SignUp), 1);
    assert_eq!(h.audit.count_by_type(AuditEventType::ProfileAccess), 1);
    assert_eq!(h.audit.count_by_type(AuditEventType::Logout), 1);
}

#[tokio::test]
async fn test_duplicate_sign_up_is_rejected_without_touching_original() {
    let h = harness();
    let first = h.service.sign_up(alice_sign_up()).await.unwrap();

    let mut again = alice_sign_up();
    again.email = "  ALICE@example.com".to_string();
    again.name = "Mallory".to_string();
    again.password = "Different1!".to_string();

    let err = h.service.sign_up(again).await.unwrap_err();
    assert_eq!(err, DomainError::Auth(AuthError::DuplicateAccount));
    assert_eq!(h.users.len().await, 1);

    let stored = h.users.find_by_id(first.user.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Alice");

    // the original password still works
    assert!(h.service.sign_in(alice_sign_in("Password123!")).await.is_ok());
}

#[tokio::test]
async fn test_sign_up_rejects_invalid_input() {
    let h = harness();
    let mut input = alice_sign_up();
    input.password = "password".to_string();

    let err = h.service.sign_up(input).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::PatternMismatch { .. })
    ));
    assert_eq!(h.users.len().await, 0);
}

#[tokio::test]
async fn test_sign_in_success() {
    let h = harness();
    h.service.sign_up(alice_sign_up()).await.unwrap();

    let response = h.service.sign_in(alice_sign_in("Password123!")).await.unwrap();
    assert_eq!(response.user.email, "alice@example.com");
    assert!(h.validator.validate(Some(&response.access_token)).await.is_ok());
    assert_eq!(h.audit.count_by_type(AuditEventType::SignInSuccess), 1);
}

#[tokio::test]
async fn test_sign_in_failures_are_indistinguishable() {
    let h = harness();
    h.service.sign_up(alice_sign_up()).await.unwrap();

    let wrong_password = h.service.sign_in(alice_sign_in("Password999!")).await.unwrap_err();
    let unknown = h
        .service
        .sign_in(SignInInput {
            email: "bob@example.com".to_string(),
            password: "Password123!".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(wrong_password, DomainError::Auth(AuthError::InvalidCredentials));
    assert_eq!(unknown, DomainError::Auth(AuthError::InvalidCredentials));
    assert_eq!(h.audit.count_by_type(AuditEventType::SignInFailure), 2);
}

#[tokio::test]
async fn test_inactive_user_cannot_sign_in() {
    let h = harness();
    let hash = BcryptPasswordHasher::new(4).hash("Password123!").await.unwrap();
    let mut user = User::new(NewUser {
        email: "alice@example.com".to_string(),
        name: "Alice".to_string(),
        password_hash: hash,
    });
    user.deactivate();
    h.users.put(user).await;

    let err = h.service.sign_in(alice_sign_in("Password123!")).await.unwrap_err();
    assert_eq!(err, DomainError::Auth(AuthError::InvalidCredentials));
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let h = harness();
    let response = h.service.sign_up(alice_sign_up()).await.unwrap();
    let session = h.validator.validate(Some(&response.access_token)).await.unwrap();

    h.service.logout(&session).await.unwrap();
    h.service.logout(&session).await.unwrap();
    assert_eq!(h.revocations.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_logout_only_revokes_presented_token() {
    let h = harness();
    let first = h.service.sign_up(alice_sign_up()).await.unwrap();
    let second = h.service.sign_in(alice_sign_in("Password123!")).await.unwrap();

    let session = h.validator.validate(Some(&first.access_token)).await.unwrap();
    h.service.logout(&session).await.unwrap();

    assert!(h.validator.validate(Some(&first.access_token)).await.is_err());
    assert!(h.validator.validate(Some(&second.access_token)).await.is_ok());
}

#[tokio::test]
async fn test_logout_entry_outlives_token() {
    let h = harness();
    let response = h.service.sign_up(alice_sign_up()).await.unwrap();
    let session = h.validator.validate(Some(&response.access_token)).await.unwrap();

    let now = Utc::now();
    h.service.logout_at(&session, now).await.unwrap();

    let entry = h.revocations.entries().await.remove(0);
    assert!(entry.purge_after >= session.claims.expires_at());
    assert!(entry.purge_after >= now + Duration::seconds(86_400));
}

#[tokio::test]
async fn test_logout_surfaces_store_outage() {
    let h = harness();
    let response = h.service.sign_up(alice_sign_up()).await.unwrap();
    let session = h.validator.validate(Some(&response.access_token)).await.unwrap();

    h.revocations.set_unavailable(true);
    let err = h.service.logout(&session).await.unwrap_err();
    assert!(matches!(err, DomainError::StoreUnavailable { .. }));
}

#[tokio::test]
async fn test_concurrent_logout_records_one_entry() {
    let h = Arc::new(harness());
    let response = h.service.sign_up(alice_sign_up()).await.unwrap();
    let session = h.validator.validate(Some(&response.access_token)).await.unwrap();

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let h = Arc::clone(&h);
        let session = session.clone();
        tasks.push(tokio::spawn(async move { h.service.logout(&session).await }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(h.revocations.count().await.unwrap(), 1);
}
