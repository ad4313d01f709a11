//! Shared utilities and common types for the AuthGate server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Input sanitization and log masking helpers

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    LogFormat, LoggingConfig, PasswordConfig, ReaperConfig, ServerConfig, StorageBackend,
};
pub use errors::{error_codes, ErrorResponse};
pub use utils::{mask, sanitize};
