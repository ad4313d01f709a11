//! Process-local stores
//!
//! Same contracts as the MySQL repositories, kept in maps behind a tokio
//! `RwLock`. State is lost on restart.

mod audit_repository;
mod revocation_repository;
mod user_repository;


pub use audit_repository::InMemoryAuditLogRepository;
pub use revocation_repository::InMemoryRevocationRepository;
pub use user_repository::InMemoryUserRepository;
