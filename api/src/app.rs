//! Application state and factory
//!
//! This module wires repositories into the core services and provides the
//! factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use ag_core::errors::DomainError;
use ag_core::repositories::{AuditLogRepository, RevocationRepository, UserRepository};
use ag_core::services::audit::{AuditService, AuditServiceConfig};
use ag_core::services::auth::AuthService;
use ag_core::services::credentials::{BcryptPasswordHasher, PasswordHasher};
use ag_core::services::token::{SessionValidator, SessionVerifier, TokenConfig, TokenIssuer};
use ag_shared::config::AppConfig;

use crate::handlers::error::json_error_handler;
use crate::middleware::{create_cors, JwtAuth, SecurityMiddleware};
use crate::routes::auth::{logout, profile, signin, signup};

/// Services shared by every worker
pub struct AppState<U, R, H, A>
where
    U: UserRepository,
    R: RevocationRepository,
    H: PasswordHasher,
    A: AuditLogRepository + 'static,
{
    pub auth_service: Arc<AuthService<U, R, H, A>>,
    /// Validator behind the authentication middleware
    pub verifier: Arc<dyn SessionVerifier>,
}

impl<U, R, A> AppState<U, R, BcryptPasswordHasher, A>
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    A: AuditLogRepository + 'static,
{
    /// Assemble the services from configuration and the chosen stores
    ///
    /// Fails when the signing key is unusable for the configured
    /// environment.
    pub fn build(
        config: &AppConfig,
        users: Arc<U>,
        revocations: Arc<R>,
        audit_log: Arc<A>,
    ) -> Result<Self, DomainError> {
        let token_config = TokenConfig::from_settings(&config.auth.jwt, config.environment);
        let issuer = TokenIssuer::new(token_config)?;

        let verifier: Arc<dyn SessionVerifier> = Arc::new(SessionValidator::new(
            issuer.keys(),
            Arc::clone(&revocations),
            config.auth.jwt.leeway_seconds,
        ));

        let hasher = Arc::new(BcryptPasswordHasher::new(config.auth.password.bcrypt_cost));
        let audit = Arc::new(AuditService::new(audit_log, AuditServiceConfig::default()));
        let auth_service = AuthService::with_audit(users, revocations, hasher, issuer, audit);

        Ok(Self {
            auth_service: Arc::new(auth_service),
            verifier,
        })
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, R, H, A>(
    app_state: web::Data<AppState<U, R, H, A>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    H: PasswordHasher + 'static,
    A: AuditLogRepository + 'static,
{
    let auth = JwtAuth::new(Arc::clone(&app_state.verifier));
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        // Middleware runs bottom-up: tracing span first, then CORS, then headers
        .wrap(SecurityMiddleware::for_environment(config.environment))
        .wrap(create_cors(&config.cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .route("/api", web::get().to(api_documentation))
        .service(
            web::scope("/api/auth")
                .route("/signup", web::post().to(signup::<U, R, H, A>))
                .route("/signin", web::post().to(signin::<U, R, H, A>))
                .service(
                    web::resource("/logout")
                        .wrap(auth.clone())
                        .route(web::post().to(logout::<U, R, H, A>)),
                )
                .service(
                    web::resource("/profile")
                        .wrap(auth)
                        .route(web::get().to(profile::<U, R, H, A>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "authgate-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "AuthGate API",
        "endpoints": {
            "health": "/health",
            "auth": {
                "signup": {
                    "path": "/api/auth/signup",
                    "method": "POST",
                    "description": "Create an account and open a session",
                    "request_body": {
                        "email": "string (valid email, max 100 chars)",
                        "name": "string (3-50 letters and spaces)",
                        "password": "string (8-128 chars, letter, digit and one of @$!%*#?&)"
                    },
                    "responses": {
                        "201": "Account created, returns access_token and user",
                        "400": "Invalid input",
                        "409": "Email already registered"
                    }
                },
                "signin": {
                    "path": "/api/auth/signin",
                    "method": "POST",
                    "description": "Open a session with email and password",
                    "request_body": {
                        "email": "string",
                        "password": "string"
                    },
                    "responses": {
                        "200": "Returns access_token and user",
                        "401": "Invalid credentials"
                    }
                },
                "logout": {
                    "path": "/api/auth/logout",
                    "method": "POST",
                    "description": "Revoke the presented session token",
                    "requires_auth": true,
                    "responses": {
                        "200": "Logged out",
                        "401": "Authentication required"
                    }
                },
                "profile": {
                    "path": "/api/auth/profile",
                    "method": "GET",
                    "description": "Profile of the authenticated user",
                    "requires_auth": true,
                    "responses": {
                        "200": "Returns id, email and name",
                        "401": "Authentication required"
                    }
                }
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
