//! Catalog service - server directory reads and admin writes.

use std::sync::Arc;

use chrono::Utc;

use crate::catalog::{self, Page, PageRequest, ServerFilter, ServerSort};
use crate::domain::server::{McpServer, NewServer};
use crate::latency::Latency;
use crate::ports::{CoreError, RepositoryError, ServerRepository};
use crate::validation;

/// Service for the server directory.
///
/// Reads run the full query pipeline over a repository snapshot; writes
/// go straight to the repository. Every call sleeps on the simulated
/// latency first, like the network round trip it stands in for.
pub struct CatalogService {
    repo: Arc<dyn ServerRepository>,
    latency: Latency,
}

impl CatalogService {
    /// Create a new catalog service over the given repository.
    pub const fn new(repo: Arc<dyn ServerRepository>, latency: Latency) -> Self {
        Self { repo, latency }
    }

    /// Filtered, sorted, paginated server listing.
    pub async fn list(
        &self,
        filter: &ServerFilter,
        sort: Option<ServerSort>,
        page: PageRequest,
    ) -> Result<Page<McpServer>, CoreError> {
        self.latency.catalog().await;
        let servers = self.repo.list().await.map_err(CoreError::from)?;
        Ok(catalog::query_servers(servers, filter, sort, page))
    }

    /// Look up a single server. Absence is not an error.
    pub async fn get(&self, id: &str) -> Result<Option<McpServer>, CoreError> {
        self.latency.catalog().await;
        match self.repo.get_by_id(id).await {
            Ok(server) => Ok(Some(server)),
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(CoreError::from(e)),
        }
    }

    /// Register a new server and return the stored record.
    ///
    /// Validates the registration, applies the catalog defaults
    /// (publisher "Unknown", license "MIT", grade B, unverified, empty
    /// toolset), and appends.
    pub async fn create(&self, new_server: NewServer) -> Result<McpServer, CoreError> {
        self.latency.catalog().await;
        validation::validate_registration(&new_server)?;

        let now = Utc::now();
        let id = format!("server-{}", now.timestamp_millis());
        let server = new_server.into_server(id, now.date_naive());
        self.repo
            .insert(server.clone())
            .await
            .map_err(CoreError::from)?;

        tracing::info!(server_id = %server.id, name = %server.name, "Registered new server");
        Ok(server)
    }

    /// Mark a server as verified. Returns the updated record, or `None`
    /// if no such server exists.
    pub async fn verify(&self, id: &str) -> Result<Option<McpServer>, CoreError> {
        self.latency.catalog().await;
        match self.repo.set_verified(id).await {
            Ok(server) => {
                tracing::info!(server_id = %id, "Server verified");
                Ok(Some(server))
            }
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(CoreError::from(e)),
        }
    }

    /// Remove a rejected server. Returns whether anything was removed.
    pub async fn reject(&self, id: &str) -> Result<bool, CoreError> {
        self.latency.catalog().await;
        match self.repo.remove(id).await {
            Ok(()) => {
                tracing::info!(server_id = %id, "Server rejected and removed");
                Ok(true)
            }
            Err(RepositoryError::NotFound(_)) => Ok(false),
            Err(e) => Err(CoreError::from(e)),
        }
    }
}
