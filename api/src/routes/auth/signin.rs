use actix_web::{web, HttpResponse};

use ag_core::repositories::{AuditLogRepository, RevocationRepository, UserRepository};
use ag_core::services::credentials::PasswordHasher;

use crate::app::AppState;
use crate::dto::auth::SignInRequest;
use crate::handlers::error::handle_domain_error;

/// Handler for POST /api/auth/signin
///
/// Unknown email, wrong password and inactive account all answer with the
/// same 401 body.
///
/// ## Errors
/// - 400 Bad Request: Missing or malformed fields
/// - 401 Unauthorized: Credentials rejected
pub async fn signin<U, R, H, A>(
    state: web::Data<AppState<U, R, H, A>>,
    body: web::Json<SignInRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    H: PasswordHasher + 'static,
    A: AuditLogRepository + 'static,
{
    match state.auth_service.sign_in(body.into_inner().into()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => handle_domain_error(&error),
    }
}
