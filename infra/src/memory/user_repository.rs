//! In-memory implementation of the UserRepository trait.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use ag_core::domain::entities::user::User;
use ag_core::errors::DomainError;
use ag_core::repositories::UserRepository;

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    /// Unique email index
    by_email: HashMap<String, Uuid>,
}

/// Users held in memory, with the email index updated under the same lock
/// as the rows
#[derive(Default)]
pub struct InMemoryUserRepository {
    tables: RwLock<Tables>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .by_email
            .get(email)
            .and_then(|id| tables.users.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;
        if tables.by_email.contains_key(&user.email) {
            return Err(DomainError::DuplicateEntry {
                resource: "user email".to_string(),
            });
        }
        tables.by_email.insert(user.email.clone(), user.id);
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }
}
