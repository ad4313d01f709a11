//! Audit log repository trait defining the interface for audit persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::audit::AuditEvent;
use crate::errors::DomainError;

/// Repository trait for audit events
///
/// Callers treat failures as non-fatal: an audit write never decides the
/// outcome of the request that produced it.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Persist one event
    async fn record(&self, event: &AuditEvent) -> Result<(), DomainError>;

    /// Most recent events for a user, newest first
    async fn find_by_user(&self, user_id: Uuid, limit: usize) -> Result<Vec<AuditEvent>, DomainError>;
}
