//! Database module - MySQL implementations using SQLx
//!
//! This module provides database access layer implementations including:
//! - Connection pool management and migrations
//! - Repository implementations for users, revoked tokens and audit events

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlAuditLogRepository, MySqlRevocationRepository, MySqlUserRepository};
