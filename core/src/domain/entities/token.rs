//! Session token entities for JWT-based authentication.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::errors::TokenError;

use super::user::UserProfile;

/// Default JWT issuer
pub const JWT_ISSUER: &str = "authgate";

/// Default JWT audience
pub const JWT_AUDIENCE: &str = "authgate-api";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Email of the user at issue time
    pub email: String,

    /// Display name of the user at issue time
    pub name: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID, unique per issued token
    pub jti: String,
}

impl Claims {
    /// Creates claims for a verified identity, valid for `ttl` from `now`
    pub fn for_identity(
        identity: &UserProfile,
        now: DateTime<Utc>,
        ttl: Duration,
        issuer: &str,
        audience: &str,
    ) -> Result<Self, TokenError> {
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or(TokenError::TokenGenerationFailed)?;

        Ok(Self {
            sub: identity.id.to_string(),
            email: identity.email.clone(),
            name: identity.name.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
        })
    }

    /// Checks if the claims have expired at `now`, allowing `leeway` seconds
    pub fn is_expired_at(&self, now: DateTime<Utc>, leeway: i64) -> bool {
        now.timestamp() >= self.exp.saturating_add(leeway)
    }

    /// Expiration as a timestamp
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// A freshly signed session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Compact JWS string handed to the client
    pub token: String,

    /// The claims that were signed
    pub claims: Claims,
}

/// Identifier under which a token is stored in the revocation store.
///
/// SHA-256 of the exact token string, hex encoded. The raw token is never
/// persisted.
pub fn token_identifier(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
