//! Domain-specific error types and error handling.

mod types;


pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The backing store could not be reached or failed mid-operation
    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },

    /// A unique key already holds this value
    #[error("Duplicate entry: {resource}")]
    DuplicateEntry { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        DomainError::StoreUnavailable {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// True for every outcome that must surface as a generic 401
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            DomainError::Auth(AuthError::InvalidCredentials)
                | DomainError::Token(
                    TokenError::MissingToken
                        | TokenError::MalformedToken { .. }
                        | TokenError::ExpiredToken
                        | TokenError::RevokedToken
                )
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
