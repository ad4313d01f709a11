//! MySQL implementation of the AuditLogRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ag_core::domain::entities::audit::{AuditEvent, AuditEventType};
use ag_core::errors::DomainError;
use ag_core::repositories::AuditLogRepository;

use super::{column_error, map_sqlx_error};

/// MySQL implementation of AuditLogRepository
pub struct MySqlAuditLogRepository {
    pool: MySqlPool,
}

impl MySqlAuditLogRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_event(row: &sqlx::mysql::MySqlRow) -> Result<AuditEvent, DomainError> {
        let id: String = row.try_get("id").map_err(|e| column_error("id", e))?;

        let event_type_str: String = row
            .try_get("event_type")
            .map_err(|e| column_error("event_type", e))?;
        let event_type = AuditEventType::parse(&event_type_str).ok_or_else(|| {
            DomainError::internal(format!("Unknown event type: {}", event_type_str))
        })?;

        let user_id: Option<String> = row.try_get("user_id").map_err(|e| column_error("user_id", e))?;
        let user_id = user_id
            .map(|id| Uuid::parse_str(&id))
            .transpose()
            .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?;

        Ok(AuditEvent {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid UUID: {}", e)))?,
            event_type,
            user_id,
            email_masked: row
                .try_get("email_masked")
                .map_err(|e| column_error("email_masked", e))?,
            success: row.try_get("success").map_err(|e| column_error("success", e))?,
            detail: row.try_get("detail").map_err(|e| column_error("detail", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column_error("created_at", e))?,
        })
    }
}

#[async_trait]
impl AuditLogRepository for MySqlAuditLogRepository {
    async fn record(&self, event: &AuditEvent) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO audit_logs (
                id, event_type, user_id, email_masked, success, detail, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(event.id.to_string())
            .bind(event.event_type.as_str())
            .bind(event.user_id.map(|id| id.to_string()))
            .bind(&event.email_masked)
            .bind(event.success)
            .bind(&event.detail)
            .bind(event.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "audit event"))?;

        Ok(())
    }

    async fn find_by_user(&self, user_id: Uuid, limit: usize) -> Result<Vec<AuditEvent>, DomainError> {
        let query = r#"
            SELECT id, event_type, user_id, email_masked, success, detail, created_at
            FROM audit_logs
            WHERE user_id = ?
            ORDER BY created_at DESC
            LIMIT ?
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(limit as u64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "audit event"))?;

        rows.iter().map(Self::row_to_event).collect()
    }
}
