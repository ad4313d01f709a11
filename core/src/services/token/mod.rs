//! Session token module
//!
//! This module handles the lifecycle of a session token:
//! - signing new tokens for verified identities
//! - validating presented tokens (signature, expiry, revocation)
//! - periodic removal of revocation entries whose tokens have expired

mod config;
mod issuer;
mod keys;
mod reaper;
mod validator;

#[cfg(test)]
mod tests;

pub use config::TokenConfig;
pub use issuer::TokenIssuer;
pub use keys::JwtKeys;
pub use reaper::{ReapResult, RevocationReaper};
pub use validator::{AuthenticatedSession, Rejection, SessionStage, SessionValidator, SessionVerifier};
