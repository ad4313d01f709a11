//! User repository trait defining the interface for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Emails are stored already normalized (trimmed, lowercased); lookups
/// expect the same form.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their normalized email
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No account with this email
    /// * `Err(DomainError)` - Store error
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Create a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::DuplicateEntry)` - The email is taken; enforced by
    ///   the store's unique key
    async fn create(&self, user: User) -> Result<User, DomainError>;
}
