//! Audit log repository module.

mod r#trait;
pub use r#trait::AuditLogRepository;

mod noop;
pub use noop::NoOpAuditLogRepository;

#[cfg(test)]
mod mock;
#[cfg(test)]
pub use mock::MockAuditLogRepository;
