//! In-memory implementation of the AuditLogRepository trait.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use ag_core::domain::entities::audit::AuditEvent;
use ag_core::errors::DomainError;
use ag_core::repositories::AuditLogRepository;

/// Append-only event list, capped at `capacity` (oldest dropped first)
pub struct InMemoryAuditLogRepository {
    events: RwLock<Vec<AuditEvent>>,
    capacity: usize,
}

impl InMemoryAuditLogRepository {
    pub const DEFAULT_CAPACITY: usize = 10_000;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: RwLock::new(Vec::new()),
            capacity: capacity.max(1),
        }
    }

    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }
}

impl Default for InMemoryAuditLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryAuditLogRepository {
    async fn record(&self, event: &AuditEvent) -> Result<(), DomainError> {
        let mut events = self.events.write().await;
        if events.len() >= self.capacity {
            let overflow = events.len() + 1 - self.capacity;
            events.drain(..overflow);
        }
        events.push(event.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: Uuid, limit: usize) -> Result<Vec<AuditEvent>, DomainError> {
        let events = self.events.read().await;
        Ok(events
            .iter()
            .rev()
            .filter(|e| e.user_id == Some(user_id))
            .take(limit)
            .cloned()
            .collect())
    }
}
