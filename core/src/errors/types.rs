//! Domain-specific error types for authentication, session tokens and input
//! validation.
//!
//! Messages here are for logs. The presentation layer decides what a client
//! gets to see, and every authentication failure collapses into one generic
//! response there.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email, wrong password or inactive account
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("An account with this email already exists")]
    DuplicateAccount,
}

/// Session token errors
///
/// Each variant is a distinct rejection reason of the session validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Missing bearer token")]
    MissingToken,

    /// Bad structure, bad signature, wrong issuer/audience or bad subject
    #[error("Malformed token: {reason}")]
    MalformedToken { reason: String },

    #[error("Token expired")]
    ExpiredToken,

    #[error("Token revoked")]
    RevokedToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        TokenError::MalformedToken {
            reason: reason.into(),
        }
    }
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid length: {field} (min: {min}, max: {max})")]
    LengthOutOfRange { field: String, min: usize, max: usize },

    #[error("Pattern mismatch: {field}: {rule}")]
    PatternMismatch { field: String, rule: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Potentially malicious content in field: {field}")]
    MaliciousContent { field: String },
}

impl ValidationError {
    /// The request field the error refers to
    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field }
            | ValidationError::LengthOutOfRange { field, .. }
            | ValidationError::PatternMismatch { field, .. }
            | ValidationError::MaliciousContent { field } => field,
            ValidationError::InvalidEmail => "email",
        }
    }

    /// Machine readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::RequiredField { .. } => "required",
            ValidationError::LengthOutOfRange { .. } => "length",
            ValidationError::PatternMismatch { .. } => "pattern",
            ValidationError::InvalidEmail => "email",
            ValidationError::MaliciousContent { .. } => "malicious_content",
        }
    }
}
