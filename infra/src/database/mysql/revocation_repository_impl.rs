//! MySQL implementation of the RevocationRepository trait.
//!
//! Rows live in `revoked_tokens`, keyed by the token hash. The primary key
//! settles concurrent logouts of the same token; the `purge_after` index
//! serves the reaper's range delete.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use ag_core::domain::entities::revocation::RevocationEntry;
use ag_core::errors::DomainError;
use ag_core::repositories::RevocationRepository;

use super::{column_error, map_sqlx_error};

pub struct MySqlRevocationRepository {
    pool: MySqlPool,
}

impl MySqlRevocationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevocationRepository for MySqlRevocationRepository {
    async fn record(&self, entry: RevocationEntry) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO revoked_tokens (token_hash, user_id, revoked_at, purge_after)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&entry.token_hash)
            .bind(entry.user_id.to_string())
            .bind(entry.revoked_at)
            .bind(entry.purge_after)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "revoked token"))?;

        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, DomainError> {
        let row = sqlx::query(
            "SELECT EXISTS(SELECT 1 FROM revoked_tokens WHERE token_hash = ?) AS revoked",
        )
        .bind(token_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "revoked token"))?;

        let revoked: i64 = row.try_get("revoked").map_err(|e| column_error("revoked", e))?;
        Ok(revoked == 1)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM revoked_tokens WHERE purge_after < ?")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "revoked token"))?;

        Ok(result.rows_affected() as usize)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM revoked_tokens")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "revoked token"))?;

        let total: i64 = row.try_get("total").map_err(|e| column_error("total", e))?;
        Ok(total.max(0) as usize)
    }
}
