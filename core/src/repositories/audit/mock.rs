//! Mock implementation of AuditLogRepository for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::domain::entities::audit::{AuditEvent, AuditEventType};
use crate::errors::DomainError;

use super::AuditLogRepository;

/// Mock implementation of AuditLogRepository for testing
pub struct MockAuditLogRepository {
    events: Arc<Mutex<Vec<AuditEvent>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockAuditLogRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Set whether operations should fail
    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    /// Get all stored events for testing
    pub fn all_events(&self) -> Vec<AuditEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Count events of a given type
    pub fn count_by_type(&self, event_type: AuditEventType) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.event_type == event_type)
            .count()
    }
}

impl Default for MockAuditLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditLogRepository for MockAuditLogRepository {
    async fn record(&self, event: &AuditEvent) -> Result<(), DomainError> {
        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::internal("mock audit failure"));
        }
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: Uuid, limit: usize) -> Result<Vec<AuditEvent>, DomainError> {
        let mut events: Vec<AuditEvent> = self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == Some(user_id))
            .cloned()
            .collect();
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        events.truncate(limit);
        Ok(events)
    }
}
