//! Credential hashing and verification

mod hasher;
mod verifier;

pub use hasher::{BcryptPasswordHasher, PasswordHasher};
pub use verifier::CredentialVerifier;
