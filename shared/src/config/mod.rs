//! Configuration module with business-specific sub-modules
//!
//! - `auth` - token signing, password hashing and reaper schedule
//! - `database` - storage backend and connection pool
//! - `environment` - environment detection and logging
//! - `server` - HTTP bind address and CORS

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::{AuthConfig, JwtConfig, PasswordConfig, ReaperConfig};
pub use database::{DatabaseConfig, StorageBackend};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Configuration that must stop the process before the server binds
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT secret must not be empty")]
    EmptySecret,

    #[error("JWT_SECRET must be set in production")]
    DefaultSecretInProduction,

    #[error("JWT secret must be at least {min} bytes in production")]
    SecretTooShort { min: usize },

    #[error("Token lifetime must be positive, got {0} seconds")]
    InvalidTokenTtl(i64),

    #[error("Token lifetime must be at most {max} seconds")]
    TokenTtlTooLong { max: i64 },

    #[error("Clock leeway must not be negative, got {0} seconds")]
    InvalidLeeway(i64),

    #[error("Clock leeway must be at most {max} seconds")]
    LeewayTooLarge { max: i64 },

    #[error("bcrypt cost must be between 4 and 31, got {0}")]
    InvalidBcryptCost(u32),

    #[error("Reaper interval must be positive")]
    InvalidReaperInterval,

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let database = DatabaseConfig::from_env().map_err(ConfigError::InvalidValue)?;

        Ok(Self {
            environment,
            server: ServerConfig::from_env(),
            database,
            auth: AuthConfig::from_env(),
            cors: CorsConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        })
    }

    /// Reject settings the service cannot safely run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.auth.jwt.check(self.environment.is_production())?;

        let cost = self.auth.password.bcrypt_cost;
        if !(4..=31).contains(&cost) {
            return Err(ConfigError::InvalidBcryptCost(cost));
        }

        if self.auth.reaper.enabled && self.auth.reaper.interval_seconds == 0 {
            return Err(ConfigError::InvalidReaperInterval);
        }

        Ok(())
    }
}
