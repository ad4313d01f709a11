//! Business services containing domain logic and use cases.

pub mod audit;
pub mod auth;
pub mod credentials;
pub mod token;

// Re-export commonly used types
pub use audit::{AuditService, AuditServiceConfig};
pub use auth::{AuthService, SignInInput, SignUpInput};
pub use credentials::{BcryptPasswordHasher, CredentialVerifier, PasswordHasher};
pub use token::{
    AuthenticatedSession, JwtKeys, ReapResult, Rejection, RevocationReaper, SessionStage,
    SessionValidator, SessionVerifier, TokenConfig, TokenIssuer,
};
