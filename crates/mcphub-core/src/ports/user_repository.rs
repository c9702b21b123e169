//! User repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::user::{User, UserStatus};

/// Repository for platform user accounts.
///
/// Accounts here are the rows the admin console manages, not the mock
/// login identity; that one lives in the token store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user account, in stored order.
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;

    /// Get a user by their id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the user doesn't exist.
    async fn get_by_id(&self, id: &str) -> Result<User, RepositoryError>;

    /// Replace a user's account status and return the updated row.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the user doesn't exist.
    async fn set_status(&self, id: &str, status: UserStatus) -> Result<User, RepositoryError>;
}
