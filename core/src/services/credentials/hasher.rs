//! Password hashing collaborator

use async_trait::async_trait;
use tracing::warn;

use ag_shared::config::auth::DEFAULT_BCRYPT_COST;

use crate::errors::DomainError;

/// Hashes and checks passwords
///
/// Implementations must keep CPU-heavy work off the async executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, plaintext: &str) -> Result<String, DomainError>;

    /// `Ok(false)` for a wrong password and for an unreadable stored hash
    async fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, DomainError>;
}

/// bcrypt on the blocking thread pool
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| DomainError::internal(format!("hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("password hashing failed: {}", e)))
    }

    async fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, DomainError> {
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();

        let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("verification task failed: {}", e)))?;

        match outcome {
            Ok(matches) => Ok(matches),
            Err(e) => {
                warn!(error = %e, "Stored password hash could not be read");
                Ok(false)
            }
        }
    }
}
