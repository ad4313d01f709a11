//! No-op implementation of AuditLogRepository for when audit logging is not needed

use async_trait::async_trait;
use uuid::Uuid;

use super::AuditLogRepository;
use crate::domain::entities::audit::AuditEvent;
use crate::errors::DomainError;

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpAuditLogRepository;

impl NoOpAuditLogRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuditLogRepository for NoOpAuditLogRepository {
    async fn record(&self, _event: &AuditEvent) -> Result<(), DomainError> {
        Ok(())
    }

    async fn find_by_user(&self, _user_id: Uuid, _limit: usize) -> Result<Vec<AuditEvent>, DomainError> {
        Ok(Vec::new())
    }
}
