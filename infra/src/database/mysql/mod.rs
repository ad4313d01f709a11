//! MySQL repository implementations

mod audit_repository_impl;
mod revocation_repository_impl;
mod user_repository_impl;

pub use audit_repository_impl::MySqlAuditLogRepository;
pub use revocation_repository_impl::MySqlRevocationRepository;
pub use user_repository_impl::MySqlUserRepository;

use ag_core::errors::DomainError;

/// Translate a SQLx failure into the domain's error vocabulary
///
/// Unique-key violations become `DuplicateEntry` for `resource`; row
/// decoding problems are internal; everything else means the store could
/// not serve the request.
pub(crate) fn map_sqlx_error(error: sqlx::Error, resource: &str) -> DomainError {
    match &error {
        sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::DuplicateEntry {
            resource: resource.to_string(),
        },
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::Decode(_)
        | sqlx::Error::TypeNotFound { .. } => {
            DomainError::internal(format!("Failed to decode {}: {}", resource, error))
        }
        _ => DomainError::store_unavailable(format!("{} query failed: {}", resource, error)),
    }
}

pub(crate) fn column_error(column: &str, error: sqlx::Error) -> DomainError {
    DomainError::internal(format!("Failed to get {}: {}", column, error))
}
