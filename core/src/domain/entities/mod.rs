//! Domain entities representing core business objects.

pub mod audit;
pub mod revocation;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use audit::{AuditEvent, AuditEventType};
pub use revocation::{RevocationEntry, RevocationPolicy};
pub use token::{token_identifier, Claims, IssuedToken, JWT_AUDIENCE, JWT_ISSUER};
pub use user::{NewUser, User, UserProfile};
