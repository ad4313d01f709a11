use actix_web::{web, HttpResponse};

use ag_core::repositories::{AuditLogRepository, RevocationRepository, UserRepository};
use ag_core::services::credentials::PasswordHasher;

use crate::app::AppState;
use crate::dto::auth::SignUpRequest;
use crate::handlers::error::handle_domain_error;

/// Handler for POST /api/auth/signup
///
/// # Request Body
///
/// ```json
/// {
///     "email": "alice@example.com",
///     "name": "Alice Smith",
///     "password": "Password123!"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "user": { "id": "...", "email": "alice@example.com", "name": "Alice Smith" }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Input failed validation or contained disallowed content
/// - 409 Conflict: Email already registered
pub async fn signup<U, R, H, A>(
    state: web::Data<AppState<U, R, H, A>>,
    body: web::Json<SignUpRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    H: PasswordHasher + 'static,
    A: AuditLogRepository + 'static,
{
    match state.auth_service.sign_up(body.into_inner().into()).await {
        Ok(response) => HttpResponse::Created().json(response),
        Err(error) => handle_domain_error(&error),
    }
}
