use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use tracing::{debug, error, warn};

use ag_core::errors::{AuthError, DomainError, ValidationError};
use ag_shared::errors::{error_codes, ErrorResponse};

/// The generic 401. The reason is logged by the caller, never sent.
pub fn unauthorized_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::unauthorized())
}

/// Map a domain error to its HTTP response
///
/// Every authentication failure collapses to the same 401 body.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    if error.is_authentication_failure() {
        debug!(reason = %error, "Authentication failed");
        return unauthorized_response();
    }

    match error {
        DomainError::Auth(AuthError::DuplicateAccount) => {
            HttpResponse::Conflict().json(ErrorResponse::new(
                error_codes::CONFLICT,
                "An account with this email already exists",
            ))
        }
        DomainError::ValidationErr(validation) => validation_response(validation),
        DomainError::StoreUnavailable { message } => {
            warn!(%message, "Store unavailable");
            HttpResponse::ServiceUnavailable().json(ErrorResponse::new(
                error_codes::SERVICE_UNAVAILABLE,
                "Service temporarily unavailable, please try again later",
            ))
        }
        other => {
            error!(error = %other, "Request failed");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                error_codes::INTERNAL_ERROR,
                "An internal error occurred",
            ))
        }
    }
}

fn validation_response(error: &ValidationError) -> HttpResponse {
    let (code, message) = match error {
        ValidationError::MaliciousContent { .. } => {
            warn!(field = error.field(), "Rejected input with malicious content");
            (error_codes::MALICIOUS_CONTENT, "Request contains disallowed content".to_string())
        }
        other => (error_codes::VALIDATION_ERROR, other.to_string()),
    };

    HttpResponse::BadRequest().json(
        ErrorResponse::new(code, message)
            .add_detail("field", error.field())
            .add_detail("rule", error.code()),
    )
}

/// `JsonConfig` error handler: malformed or unknown-field bodies get a JSON 400
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "Rejected request body");
    let status = match &err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        JsonPayloadError::ContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        _ => StatusCode::BAD_REQUEST,
    };
    let body = ErrorResponse::new(error_codes::BAD_REQUEST, err.to_string());
    InternalError::from_response(err, HttpResponse::build(status).json(body)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_core::errors::TokenError;

    #[test]
    fn test_auth_failures_share_one_status() {
        let errors = [
            DomainError::Auth(AuthError::InvalidCredentials),
            DomainError::Token(TokenError::MissingToken),
            DomainError::Token(TokenError::ExpiredToken),
            DomainError::Token(TokenError::RevokedToken),
            DomainError::Token(TokenError::malformed("invalid signature")),
        ];
        for error in &errors {
            assert_eq!(handle_domain_error(error).status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            handle_domain_error(&AuthError::DuplicateAccount.into()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            handle_domain_error(&ValidationError::InvalidEmail.into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            handle_domain_error(&DomainError::store_unavailable("down")).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            handle_domain_error(&DomainError::internal("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_only_duplicate_account_is_a_conflict() {
        let stray = DomainError::DuplicateEntry {
            resource: "revoked_token".to_string(),
        };
        assert_eq!(
            handle_domain_error(&stray).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
