//! Credential verifier: the single yes/no answer on a presented password

use std::sync::Arc;

use tracing::error;

use super::hasher::PasswordHasher;

/// Compares a candidate password with a stored hash
///
/// Neither value is ever logged or returned.
pub struct CredentialVerifier<H: PasswordHasher> {
    hasher: Arc<H>,
}

impl<H: PasswordHasher> Clone for CredentialVerifier<H> {
    fn clone(&self) -> Self {
        Self {
            hasher: Arc::clone(&self.hasher),
        }
    }
}

impl<H: PasswordHasher> CredentialVerifier<H> {
    pub fn new(hasher: Arc<H>) -> Self {
        Self { hasher }
    }

    /// True only if `candidate` matches `stored_hash`
    pub async fn verify(&self, stored_hash: &str, candidate: &str) -> bool {
        match self.hasher.verify(candidate, stored_hash).await {
            Ok(matches) => matches,
            Err(e) => {
                error!(error = %e, "Credential verification failed");
                false
            }
        }
    }
}
