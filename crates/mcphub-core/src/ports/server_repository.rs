//! Server repository trait definition.
//!
//! This port defines the interface for catalog persistence. Filtering,
//! sorting, and pagination all stay in the core; implementations only
//! store and return rows.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::server::McpServer;

/// Repository for the server catalog.
///
/// # Design Rules
///
/// - Whole-listing reads: `list` returns every row and the catalog
///   engine narrows the snapshot
/// - Mutations are row-level and keyed by server id
#[async_trait]
pub trait ServerRepository: Send + Sync {
    /// List every server in the catalog, in stored order.
    async fn list(&self) -> Result<Vec<McpServer>, RepositoryError>;

    /// Get a server by its id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the server doesn't exist.
    async fn get_by_id(&self, id: &str) -> Result<McpServer, RepositoryError>;

    /// Append a server to the catalog.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if a server with the
    /// same id is already stored.
    async fn insert(&self, server: McpServer) -> Result<(), RepositoryError>;

    /// Mark a server as verified and return the updated row.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the server doesn't exist.
    async fn set_verified(&self, id: &str) -> Result<McpServer, RepositoryError>;

    /// Remove a server from the catalog.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the server doesn't exist.
    async fn remove(&self, id: &str) -> Result<(), RepositoryError>;
}
