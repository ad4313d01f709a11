//! Authentication configuration: token signing, password hashing and
//! revocation-store maintenance.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Secret used when `JWT_SECRET` is not set. Rejected in production.
pub const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// Minimum signing secret length accepted in production
pub const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// Longest accepted session token lifetime (365 days)
pub const MAX_TOKEN_TTL_SECONDS: i64 = 365 * 86_400;

/// Largest accepted clock leeway (one day)
pub const MAX_LEEWAY_SECONDS: i64 = 86_400;

/// bcrypt cost used unless `BCRYPT_COST` says otherwise
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Checks a signing secret and token timing before anything is signed.
///
/// Startup validation and the token issuer both run this.
pub fn check_token_settings(
    secret: &str,
    token_ttl_seconds: i64,
    leeway_seconds: i64,
    production: bool,
) -> Result<(), ConfigError> {
    if secret.trim().is_empty() {
        return Err(ConfigError::EmptySecret);
    }
    if production {
        if secret == DEFAULT_JWT_SECRET {
            return Err(ConfigError::DefaultSecretInProduction);
        }
        if secret.len() < MIN_PRODUCTION_SECRET_LEN {
            return Err(ConfigError::SecretTooShort {
                min: MIN_PRODUCTION_SECRET_LEN,
            });
        }
    }
    if token_ttl_seconds <= 0 {
        return Err(ConfigError::InvalidTokenTtl(token_ttl_seconds));
    }
    if token_ttl_seconds > MAX_TOKEN_TTL_SECONDS {
        return Err(ConfigError::TokenTtlTooLong {
            max: MAX_TOKEN_TTL_SECONDS,
        });
    }
    if leeway_seconds < 0 {
        return Err(ConfigError::InvalidLeeway(leeway_seconds));
    }
    if leeway_seconds > MAX_LEEWAY_SECONDS {
        return Err(ConfigError::LeewayTooLarge {
            max: MAX_LEEWAY_SECONDS,
        });
    }
    Ok(())
}

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Session token lifetime in seconds
    pub token_ttl_seconds: i64,

    /// Clock leeway in seconds tolerated when checking expiry
    #[serde(default)]
    pub leeway_seconds: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            token_ttl_seconds: 86_400, // 24 hours
            leeway_seconds: 0,
            issuer: String::from("authgate"),
            audience: String::from("authgate-api"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token lifetime in hours
    pub fn with_ttl_hours(mut self, hours: i64) -> Self {
        self.token_ttl_seconds = hours * 3600;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }

    /// Secret and timing checks for the given environment
    pub fn check(&self, production: bool) -> Result<(), ConfigError> {
        check_token_settings(
            &self.secret,
            self.token_ttl_seconds,
            self.leeway_seconds,
            production,
        )
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt cost factor
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

/// Expiry reaper schedule
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReaperConfig {
    /// Seconds between sweeps of the revocation store
    pub interval_seconds: u64,

    /// Whether the periodic sweep runs at all
    pub enabled: bool,
}

impl Default for ReaperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 86_400, // once a day
            enabled: true,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,

    /// Revocation store maintenance
    #[serde(default)]
    pub reaper: ReaperConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = JwtConfig::default();
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").unwrap_or(defaults.secret),
            token_ttl_seconds: env_or("JWT_TOKEN_TTL_SECONDS", defaults.token_ttl_seconds),
            leeway_seconds: env_or("JWT_LEEWAY_SECONDS", defaults.leeway_seconds),
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or(defaults.audience),
        };

        let password = PasswordConfig {
            bcrypt_cost: env_or("BCRYPT_COST", PasswordConfig::default().bcrypt_cost),
        };

        let reaper_defaults = ReaperConfig::default();
        let reaper = ReaperConfig {
            interval_seconds: env_or("REAPER_INTERVAL_SECONDS", reaper_defaults.interval_seconds),
            enabled: env_or("REAPER_ENABLED", reaper_defaults.enabled),
        };

        Self { jwt, password, reaper }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.token_ttl_seconds, 86_400);
        assert_eq!(config.leeway_seconds, 0);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret").with_ttl_hours(2);

        assert_eq!(config.token_ttl_seconds, 7200);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_reaper_runs_daily_by_default() {
        let config = ReaperConfig::default();
        assert_eq!(config.interval_seconds, 86_400);
        assert!(config.enabled);
    }

    #[test]
    fn test_token_settings_bounds() {
        assert!(check_token_settings("secret", MAX_TOKEN_TTL_SECONDS, MAX_LEEWAY_SECONDS, false).is_ok());
        assert_eq!(
            check_token_settings("secret", 1_000_000_000_000_000, 0, false),
            Err(ConfigError::TokenTtlTooLong {
                max: MAX_TOKEN_TTL_SECONDS
            })
        );
        assert_eq!(
            check_token_settings("secret", 3_600, i64::MAX, false),
            Err(ConfigError::LeewayTooLarge {
                max: MAX_LEEWAY_SECONDS
            })
        );
    }

    #[test]
    fn test_password_config_uses_default_cost() {
        assert_eq!(PasswordConfig::default().bcrypt_cost, DEFAULT_BCRYPT_COST);
        assert_eq!(DEFAULT_BCRYPT_COST, 10);
    }
}
