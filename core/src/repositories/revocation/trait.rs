//! Revocation store trait: the durable set of logged-out session tokens.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::revocation::RevocationEntry;
use crate::errors::DomainError;

/// Repository trait for revoked session tokens
///
/// Entries are keyed by [`RevocationEntry::token_hash`]. Implementations must
/// enforce uniqueness of that key inside the storage layer itself (a unique
/// index, or a single critical section around insert), never by a
/// lookup followed by an insert.
///
/// # Errors
/// Connectivity problems surface as [`DomainError::StoreUnavailable`]. A
/// second insert of the same hash surfaces as [`DomainError::DuplicateEntry`].
#[async_trait]
pub trait RevocationRepository: Send + Sync {
    /// Insert a new entry
    ///
    /// # Returns
    /// * `Ok(())` - Entry stored
    /// * `Err(DomainError::DuplicateEntry)` - The token was already revoked
    async fn record(&self, entry: RevocationEntry) -> Result<(), DomainError>;

    /// Point lookup by token hash
    async fn is_revoked(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Delete every entry with `purge_after < now`
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of entries removed
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError>;

    /// Number of entries currently stored
    async fn count(&self) -> Result<usize, DomainError>;
}
