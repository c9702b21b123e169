//! User service - admin console reads and status updates.

use std::sync::Arc;

use crate::catalog::{self, Page, PageRequest, UserFilter};
use crate::domain::user::{User, UserStatus};
use crate::latency::Latency;
use crate::ports::{CoreError, RepositoryError, UserRepository};

/// Service for platform user accounts.
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    latency: Latency,
}

impl UserService {
    /// Create a new user service over the given repository.
    pub const fn new(repo: Arc<dyn UserRepository>, latency: Latency) -> Self {
        Self { repo, latency }
    }

    /// Filtered, paginated user listing, in stored order.
    pub async fn list(
        &self,
        filter: &UserFilter,
        page: PageRequest,
    ) -> Result<Page<User>, CoreError> {
        self.latency.catalog().await;
        let users = self.repo.list().await.map_err(CoreError::from)?;
        Ok(catalog::query_users(users, filter, page))
    }

    /// Look up a single user. Absence is not an error.
    pub async fn get(&self, id: &str) -> Result<Option<User>, CoreError> {
        self.latency.catalog().await;
        match self.repo.get_by_id(id).await {
            Ok(user) => Ok(Some(user)),
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(CoreError::from(e)),
        }
    }

    /// Replace a user's account status. Returns the updated record, or
    /// `None` if no such user exists.
    pub async fn update_status(
        &self,
        id: &str,
        status: UserStatus,
    ) -> Result<Option<User>, CoreError> {
        self.latency.catalog().await;
        match self.repo.set_status(id, status).await {
            Ok(user) => {
                tracing::info!(user_id = %id, status = status.as_str(), "User status updated");
                Ok(Some(user))
            }
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(CoreError::from(e)),
        }
    }
}
