//! In-memory implementation of the RevocationRepository trait.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use ag_core::domain::entities::revocation::RevocationEntry;
use ag_core::errors::DomainError;
use ag_core::repositories::RevocationRepository;

#[derive(Default)]
struct Entries {
    by_hash: HashMap<String, RevocationEntry>,
    /// Ordered by purge time so a sweep only visits what it removes
    by_purge_after: BTreeSet<(DateTime<Utc>, String)>,
}

/// Revoked tokens held in memory
///
/// Insert and the uniqueness check share one write lock, so concurrent
/// logouts of the same token yield exactly one entry.
#[derive(Default)]
pub struct InMemoryRevocationRepository {
    entries: RwLock<Entries>,
}

impl InMemoryRevocationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RevocationRepository for InMemoryRevocationRepository {
    async fn record(&self, entry: RevocationEntry) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        if entries.by_hash.contains_key(&entry.token_hash) {
            return Err(DomainError::DuplicateEntry {
                resource: "revoked token".to_string(),
            });
        }
        entries
            .by_purge_after
            .insert((entry.purge_after, entry.token_hash.clone()));
        entries.by_hash.insert(entry.token_hash.clone(), entry);
        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, DomainError> {
        Ok(self.entries.read().await.by_hash.contains_key(token_hash))
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut entries = self.entries.write().await;

        let expired: Vec<(DateTime<Utc>, String)> = entries
            .by_purge_after
            .iter()
            .take_while(|(purge_after, _)| *purge_after < now)
            .cloned()
            .collect();

        for key in &expired {
            entries.by_purge_after.remove(key);
            entries.by_hash.remove(&key.1);
        }
        Ok(expired.len())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.entries.read().await.by_hash.len())
    }
}
