//! Revocation entries: the server-side record that a session token was
//! logged out before its natural expiry.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TokenError;

use super::token::{token_identifier, Claims};

/// One revoked token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevocationEntry {
    /// SHA-256 hex of the token string, unique in the store
    pub token_hash: String,

    /// Owner of the token
    pub user_id: Uuid,

    /// When the logout happened
    pub revoked_at: DateTime<Utc>,

    /// After this instant the token is dead on its own and the entry may go
    pub purge_after: DateTime<Utc>,
}

impl RevocationEntry {
    /// Whether the reaper may delete this entry at `now`
    pub fn is_purgeable_at(&self, now: DateTime<Utc>) -> bool {
        self.purge_after < now
    }
}

/// Derives how long a revocation entry has to outlive its token.
///
/// `purge_after = max(exp, revoked_at + token_ttl) + leeway`, so an entry
/// never disappears while the validator could still accept the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevocationPolicy {
    token_ttl_seconds: i64,
    leeway_seconds: i64,
}

impl RevocationPolicy {
    pub fn new(token_ttl_seconds: i64, leeway_seconds: i64) -> Self {
        Self {
            token_ttl_seconds,
            leeway_seconds: leeway_seconds.max(0),
        }
    }

    /// Earliest instant at which the entry may be purged
    ///
    /// Fails instead of overflowing the calendar.
    pub fn purge_after(
        &self,
        token_exp: DateTime<Utc>,
        revoked_at: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, TokenError> {
        let token_ttl = Duration::try_seconds(self.token_ttl_seconds);
        let leeway = Duration::try_seconds(self.leeway_seconds);

        token_ttl
            .zip(leeway)
            .and_then(|(token_ttl, leeway)| {
                revoked_at
                    .checked_add_signed(token_ttl)
                    .map(|lifetime_end| token_exp.max(lifetime_end))
                    .and_then(|latest| latest.checked_add_signed(leeway))
            })
            .ok_or(TokenError::TokenGenerationFailed)
    }

    /// Builds the entry for revoking `token` at `now`
    pub fn entry_for(
        &self,
        token: &str,
        claims: &Claims,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<RevocationEntry, TokenError> {
        Ok(RevocationEntry {
            token_hash: token_identifier(token),
            user_id,
            revoked_at: now,
            purge_after: self.purge_after(claims.expires_at(), now)?,
        })
    }
}
