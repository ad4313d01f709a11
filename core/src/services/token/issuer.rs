//! Token issuer: signs session tokens for verified identities

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::domain::entities::revocation::RevocationPolicy;
use crate::domain::entities::token::{Claims, IssuedToken};
use crate::domain::entities::user::UserProfile;
use crate::errors::{DomainError, TokenError};

use super::config::TokenConfig;
use super::keys::JwtKeys;

/// Stateless signer of session tokens
#[derive(Clone)]
pub struct TokenIssuer {
    keys: Arc<JwtKeys>,
    config: TokenConfig,
}

impl TokenIssuer {
    /// Creates an issuer, failing on signing-key misconfiguration
    pub fn new(config: TokenConfig) -> Result<Self, DomainError> {
        let keys = Arc::new(JwtKeys::new(&config)?);
        Ok(Self { keys, config })
    }

    /// Shares already-built keys with a validator
    pub fn with_keys(keys: Arc<JwtKeys>, config: TokenConfig) -> Self {
        Self { keys, config }
    }

    /// Issues a token valid from now for the configured lifetime
    pub fn issue(&self, identity: &UserProfile) -> Result<IssuedToken, DomainError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issues a token as if the clock read `now`
    pub fn issue_at(&self, identity: &UserProfile, now: DateTime<Utc>) -> Result<IssuedToken, DomainError> {
        let claims = Claims::for_identity(
            identity,
            now,
            Duration::try_seconds(self.config.token_ttl_seconds)
                .ok_or(TokenError::TokenGenerationFailed)?,
            &self.config.issuer,
            &self.config.audience,
        )?;
        let token = self.keys.encode(&claims)?;
        debug!(user_id = %identity.id, exp = claims.exp, "Issued session token");

        Ok(IssuedToken { token, claims })
    }

    /// Purge policy matching this issuer's lifetime and leeway
    pub fn revocation_policy(&self) -> RevocationPolicy {
        RevocationPolicy::new(self.config.token_ttl_seconds, self.config.leeway_seconds)
    }

    pub fn keys(&self) -> Arc<JwtKeys> {
        Arc::clone(&self.keys)
    }

    pub fn config(&self) -> &TokenConfig {
        &self.config
    }
}
