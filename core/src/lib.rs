//! # AuthGate Core
//!
//! Core business logic and domain layer for the AuthGate backend: session
//! token issuance, validation and revocation, credential checks and the
//! email/password authentication flow. Storage sits behind the repository
//! traits defined here.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
