pub mod audit;
pub mod revocation;
pub mod user;

pub use audit::{AuditLogRepository, NoOpAuditLogRepository};
pub use revocation::RevocationRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use audit::MockAuditLogRepository;
#[cfg(test)]
pub use revocation::MockRevocationRepository;
#[cfg(test)]
pub use user::MockUserRepository;
