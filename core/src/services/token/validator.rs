//! Session validator: decides, per request, whether a presented token still
//! represents a live session.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::entities::token::{token_identifier, Claims};
use crate::errors::{DomainError, TokenError};
use crate::repositories::RevocationRepository;

use super::keys::JwtKeys;

/// How far a token got through validation
///
/// Transitions run in order and stop at the first failure. The local checks
/// (signature, expiry) always precede the revocation lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SessionStage {
    Unchecked,
    SignatureVerified,
    NotExpired,
    NotRevoked,
    Authenticated,
}

/// A rejected token and the last stage it passed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub stage: SessionStage,
    pub error: DomainError,
}

impl Rejection {
    fn new(stage: SessionStage, error: impl Into<DomainError>) -> Self {
        Self {
            stage,
            error: error.into(),
        }
    }
}

impl From<Rejection> for DomainError {
    fn from(rejection: Rejection) -> Self {
        rejection.error
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (after {:?})", self.error, self.stage)
    }
}

/// A token that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    pub user_id: Uuid,
    pub claims: Claims,
    /// The raw token, needed to revoke it on logout
    pub token: String,
    /// Revocation-store identifier of `token`
    pub token_hash: String,
}

/// Object-safe view of a validator for the HTTP layer
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    async fn verify(&self, token: Option<&str>) -> Result<AuthenticatedSession, Rejection>;
}

/// Validates presented tokens against the signing key and the revocation
/// store
pub struct SessionValidator<R: RevocationRepository> {
    keys: Arc<JwtKeys>,
    revocations: Arc<R>,
    leeway_seconds: i64,
}

impl<R: RevocationRepository> SessionValidator<R> {
    pub fn new(keys: Arc<JwtKeys>, revocations: Arc<R>, leeway_seconds: i64) -> Self {
        Self {
            keys,
            revocations,
            leeway_seconds: leeway_seconds.max(0),
        }
    }

    /// Validate against the current clock
    pub async fn validate(&self, token: Option<&str>) -> Result<AuthenticatedSession, Rejection> {
        self.validate_at(token, Utc::now()).await
    }

    /// Validate as if the clock read `now`
    ///
    /// A store failure during the revocation lookup rejects the token.
    pub async fn validate_at(
        &self,
        token: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<AuthenticatedSession, Rejection> {
        let token = match token.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => return Err(Rejection::new(SessionStage::Unchecked, TokenError::MissingToken)),
        };

        // Unchecked -> SignatureVerified
        let claims = self.keys.decode(token).map_err(|e| {
            debug!(reason = %e, "Rejected token at signature check");
            Rejection::new(SessionStage::Unchecked, e)
        })?;
        let user_id = claims.user_id().map_err(|_| {
            debug!("Rejected token with non-UUID subject");
            Rejection::new(SessionStage::Unchecked, TokenError::malformed("bad subject"))
        })?;

        // SignatureVerified -> NotExpired
        if claims.is_expired_at(now, self.leeway_seconds) {
            debug!(user_id = %user_id, exp = claims.exp, "Rejected expired token");
            return Err(Rejection::new(SessionStage::SignatureVerified, TokenError::ExpiredToken));
        }

        // NotExpired -> NotRevoked
        let token_hash = token_identifier(token);
        match self.revocations.is_revoked(&token_hash).await {
            Ok(false) => {}
            Ok(true) => {
                debug!(user_id = %user_id, "Rejected revoked token");
                return Err(Rejection::new(SessionStage::NotExpired, TokenError::RevokedToken));
            }
            Err(e) => {
                warn!(error = %e, "Revocation lookup failed, rejecting token");
                let error = match e {
                    DomainError::StoreUnavailable { .. } => e,
                    other => DomainError::store_unavailable(other.to_string()),
                };
                return Err(Rejection::new(SessionStage::NotExpired, error));
            }
        }

        // NotRevoked -> Authenticated
        Ok(AuthenticatedSession {
            user_id,
            claims,
            token: token.to_string(),
            token_hash,
        })
    }
}

#[async_trait]
impl<R: RevocationRepository + 'static> SessionVerifier for SessionValidator<R> {
    async fn verify(&self, token: Option<&str>) -> Result<AuthenticatedSession, Rejection> {
        self.validate(token).await
    }
}
