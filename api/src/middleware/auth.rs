//! Bearer-token authentication middleware for protected endpoints.
//!
//! The token from `Authorization: Bearer <token>` is run through the session
//! validator. On success the session is stored in the request extensions for
//! the [`AuthContext`] extractor; on any failure, including a revocation
//! store outage, the request is answered with the generic JSON 401.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use tracing::debug;
use uuid::Uuid;

use ag_core::services::token::{AuthenticatedSession, SessionVerifier};

use crate::handlers::error::unauthorized_response;

/// Authenticated session injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub session: AuthenticatedSession,
}

impl AuthContext {
    pub fn user_id(&self) -> Uuid {
        self.session.user_id
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    verifier: Arc<dyn SessionVerifier>,
}

impl JwtAuth {
    pub fn new(verifier: Arc<dyn SessionVerifier>) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            verifier: Arc::clone(&self.verifier),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Arc<dyn SessionVerifier>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = Arc::clone(&self.verifier);

        Box::pin(async move {
            let token = extract_bearer_token(&req);

            match verifier.verify(token.as_deref()).await {
                Ok(session) => {
                    req.extensions_mut().insert(AuthContext { session });
                    let response = service.call(req).await?;
                    Ok(response.map_into_left_body())
                }
                Err(rejection) => {
                    debug!(
                        path = req.path(),
                        stage = ?rejection.stage,
                        reason = %rejection.error,
                        "Request rejected by session validator"
                    );
                    let (request, _payload) = req.into_parts();
                    let response = unauthorized_response().map_into_right_body();
                    Ok(ServiceResponse::new(request, response))
                }
            }
        })
    }
}

/// Extracts the token from a `Bearer` Authorization header
///
/// The scheme is matched case-insensitively. Any other scheme yields `None`.
pub fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| {
                InternalError::from_response("Authentication required", unauthorized_response())
                    .into()
            });

        ready(result)
    }
}
