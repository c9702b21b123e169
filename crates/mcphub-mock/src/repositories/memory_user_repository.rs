//! In-memory implementation of the user repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use mcphub_core::domain::user::{User, UserStatus};
use mcphub_core::ports::{RepositoryError, UserRepository};

/// In-memory user repository.
#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl MemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given rows.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.users.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<User, RepositoryError> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("user id={id}")))
    }

    async fn set_status(&self, id: &str, status: UserStatus) -> Result<User, RepositoryError> {
        let mut users = self.users.write().await;
        users.iter_mut().find(|u| u.id == id).map_or_else(
            || Err(RepositoryError::NotFound(format!("user id={id}"))),
            |u| {
                u.status = status;
                Ok(u.clone())
            },
        )
    }
}
