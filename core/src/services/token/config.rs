//! Configuration for session tokens

use ag_shared::config::{Environment, JwtConfig};
use jsonwebtoken::Algorithm;

use crate::domain::entities::token::{JWT_AUDIENCE, JWT_ISSUER};

/// Configuration for issuing and validating session tokens
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Token lifetime in seconds
    pub token_ttl_seconds: i64,
    /// Clock leeway tolerated on expiry, in seconds
    pub leeway_seconds: i64,
    /// Issuer written to and required from every token
    pub issuer: String,
    /// Audience written to and required from every token
    pub audience: String,
    /// Production rules apply to the signing secret
    pub production: bool,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            jwt_secret: ag_shared::config::auth::DEFAULT_JWT_SECRET.to_string(),
            algorithm: Algorithm::HS256,
            token_ttl_seconds: 86_400,
            leeway_seconds: 0,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
            production: false,
        }
    }
}

impl TokenConfig {
    pub fn from_settings(jwt: &JwtConfig, environment: Environment) -> Self {
        Self {
            jwt_secret: jwt.secret.clone(),
            algorithm: Algorithm::HS256,
            token_ttl_seconds: jwt.token_ttl_seconds,
            leeway_seconds: jwt.leeway_seconds,
            issuer: jwt.issuer.clone(),
            audience: jwt.audience.clone(),
            production: environment.is_production(),
        }
    }

    /// Config with the given secret and lifetime, defaults elsewhere
    pub fn with_secret(secret: impl Into<String>, token_ttl_seconds: i64) -> Self {
        Self {
            jwt_secret: secret.into(),
            token_ttl_seconds,
            ..Default::default()
        }
    }
}
