//! Mock implementation of RevocationRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::revocation::RevocationEntry;
use crate::errors::DomainError;

use super::r#trait::RevocationRepository;

/// Mock revocation store with failure injection
pub struct MockRevocationRepository {
    entries: Arc<RwLock<HashMap<String, RevocationEntry>>>,
    unavailable: AtomicBool,
    lookups: AtomicUsize,
}

impl MockRevocationRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            unavailable: AtomicBool::new(false),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Make every subsequent call fail with `StoreUnavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// How many times `is_revoked` was called
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub async fn entries(&self) -> Vec<RevocationEntry> {
        self.entries.read().await.values().cloned().collect()
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::store_unavailable("mock store offline"));
        }
        Ok(())
    }
}

impl Default for MockRevocationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationRepository for MockRevocationRepository {
    async fn record(&self, entry: RevocationEntry) -> Result<(), DomainError> {
        self.check_available()?;
        let mut entries = self.entries.write().await;

        if entries.contains_key(&entry.token_hash) {
            return Err(DomainError::DuplicateEntry {
                resource: "revoked_token".to_string(),
            });
        }

        entries.insert(entry.token_hash.clone(), entry);
        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self.entries.read().await.contains_key(token_hash))
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        self.check_available()?;
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_purgeable_at(now));
        Ok(before - entries.len())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        self.check_available()?;
        Ok(self.entries.read().await.len())
    }
}
