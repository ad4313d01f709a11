//! Audit service module for recording authentication activity.

mod service;

pub use service::{AuditService, AuditServiceConfig};
