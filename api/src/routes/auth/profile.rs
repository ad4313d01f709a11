use actix_web::{web, HttpResponse};

use ag_core::repositories::{AuditLogRepository, RevocationRepository, UserRepository};
use ag_core::services::credentials::PasswordHasher;

use crate::app::AppState;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/auth/profile
///
/// Returns `{id, email, name}` of the authenticated user.
pub async fn profile<U, R, H, A>(
    state: web::Data<AppState<U, R, H, A>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    H: PasswordHasher + 'static,
    A: AuditLogRepository + 'static,
{
    let profile = state.auth_service.profile(&auth.session).await;
    HttpResponse::Ok().json(profile)
}
