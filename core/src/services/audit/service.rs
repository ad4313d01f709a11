//! Audit service for recording authentication activity.
//!
//! Writes never block or fail the authentication flow: errors are logged
//! and dropped.

use std::sync::Arc;

use tokio::task;
use tracing::warn;
use uuid::Uuid;

use crate::domain::entities::audit::{AuditEvent, AuditEventType};
use crate::repositories::AuditLogRepository;

/// Configuration for the audit service
#[derive(Debug, Clone)]
pub struct AuditServiceConfig {
    /// Whether to run audit writes on a background task
    pub async_writes: bool,
}

impl Default for AuditServiceConfig {
    fn default() -> Self {
        Self { async_writes: true }
    }
}

/// Records audit events through a repository
pub struct AuditService<R>
where
    R: AuditLogRepository,
{
    repository: Arc<R>,
    config: AuditServiceConfig,
}

impl<R> AuditService<R>
where
    R: AuditLogRepository + 'static,
{
    /// Create a new audit service
    pub fn new(repository: Arc<R>, config: AuditServiceConfig) -> Self {
        Self { repository, config }
    }

    pub async fn log_sign_up(&self, user_id: Uuid, email: &str) {
        let event = AuditEvent::new(AuditEventType::SignUp, true)
            .with_user(user_id)
            .with_email(email);
        self.record(event).await;
    }

    /// Log a sign-in attempt; `user_id` is known only when the email matched
    pub async fn log_sign_in(&self, email: &str, user_id: Option<Uuid>, failure: Option<&str>) {
        let event_type = if failure.is_none() {
            AuditEventType::SignInSuccess
        } else {
            AuditEventType::SignInFailure
        };
        let mut event = AuditEvent::new(event_type, failure.is_none()).with_email(email);
        if let Some(id) = user_id {
            event = event.with_user(id);
        }
        if let Some(reason) = failure {
            event = event.with_detail(reason);
        }
        self.record(event).await;
    }

    pub async fn log_logout(&self, user_id: Uuid) {
        self.record(AuditEvent::new(AuditEventType::Logout, true).with_user(user_id))
            .await;
    }

    pub async fn log_profile_access(&self, user_id: Uuid) {
        self.record(AuditEvent::new(AuditEventType::ProfileAccess, true).with_user(user_id))
            .await;
    }

    /// Write one event
    pub async fn record(&self, event: AuditEvent) {
        if self.config.async_writes {
            let repository = Arc::clone(&self.repository);

            task::spawn(async move {
                if let Err(e) = repository.record(&event).await {
                    warn!(error = %e, event_type = %event.event_type, "Failed to write audit event");
                }
            });
        } else if let Err(e) = self.repository.record(&event).await {
            warn!(error = %e, event_type = %event.event_type, "Failed to write audit event");
        }
    }
}
