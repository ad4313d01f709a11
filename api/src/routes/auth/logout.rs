use actix_web::{web, HttpResponse};

use ag_core::repositories::{AuditLogRepository, RevocationRepository, UserRepository};
use ag_core::services::credentials::PasswordHasher;

use crate::app::AppState;
use crate::dto::auth::LogoutResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for POST /api/auth/logout
///
/// Revokes the token the request was authenticated with. Other sessions of
/// the same user stay valid.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {access_token}
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Logged out successfully"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing, invalid, expired or already revoked token
/// - 503 Service Unavailable: The revocation could not be stored
pub async fn logout<U, R, H, A>(
    state: web::Data<AppState<U, R, H, A>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    H: PasswordHasher + 'static,
    A: AuditLogRepository + 'static,
{
    match state.auth_service.logout(&auth.session).await {
        Ok(()) => HttpResponse::Ok().json(LogoutResponse {
            message: "Logged out successfully".to_string(),
        }),
        Err(error) => handle_domain_error(&error),
    }
}
