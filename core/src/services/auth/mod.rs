//! Authentication service module
//!
//! This module provides email/password authentication:
//! - account registration and sign-in
//! - logout by revoking the presented session token
//! - profile lookup for an authenticated session
//! - the input chain applied to credentials before they reach the core

mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use service::AuthService;
pub use validation::{SignInInput, SignUpInput, ValidSignIn, ValidSignUp};
