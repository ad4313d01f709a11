//! Shared setup for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;

use ag_api::AppState;
use ag_core::services::credentials::BcryptPasswordHasher;
use ag_infra::memory::{
    InMemoryAuditLogRepository, InMemoryRevocationRepository, InMemoryUserRepository,
};
use ag_shared::config::AppConfig;

pub type TestState = AppState<
    InMemoryUserRepository,
    InMemoryRevocationRepository,
    BcryptPasswordHasher,
    InMemoryAuditLogRepository,
>;

pub const ALICE_EMAIL: &str = "alice@example.com";
pub const ALICE_NAME: &str = "Alice Smith";
pub const ALICE_PASSWORD: &str = "Password123!";

pub struct TestContext {
    pub config: AppConfig,
    pub state: web::Data<TestState>,
    pub revocations: Arc<InMemoryRevocationRepository>,
    pub audit_log: Arc<InMemoryAuditLogRepository>,
}

/// Development config with fast hashing, over empty in-memory stores
pub fn context() -> TestContext {
    let mut config = AppConfig::default();
    config.auth.password.bcrypt_cost = 4;

    let revocations = Arc::new(InMemoryRevocationRepository::new());
    let audit_log = Arc::new(InMemoryAuditLogRepository::new());
    let state = AppState::build(
        &config,
        Arc::new(InMemoryUserRepository::new()),
        Arc::clone(&revocations),
        Arc::clone(&audit_log),
    )
    .expect("test state");

    TestContext {
        config,
        state: web::Data::new(state),
        revocations,
        audit_log,
    }
}

pub fn signup_body(email: &str, name: &str, password: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "name": name,
        "password": password,
    })
}

pub fn bearer(token: &str) -> (actix_web::http::header::HeaderName, String) {
    (actix_web::http::header::AUTHORIZATION, format!("Bearer {}", token))
}
