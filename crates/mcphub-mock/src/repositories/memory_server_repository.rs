//! In-memory implementation of the server repository.
//!
//! Rows live in an `RwLock`-guarded vector in insertion order, which is
//! the stored order the catalog engine sees. There is no persistence;
//! dropping the repository drops the catalog.

use async_trait::async_trait;
use tokio::sync::RwLock;

use mcphub_core::domain::server::McpServer;
use mcphub_core::ports::{RepositoryError, ServerRepository};

/// In-memory server repository.
#[derive(Default)]
pub struct MemoryServerRepository {
    servers: RwLock<Vec<McpServer>>,
}

impl MemoryServerRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given rows.
    #[must_use]
    pub fn with_servers(servers: Vec<McpServer>) -> Self {
        Self {
            servers: RwLock::new(servers),
        }
    }
}

#[async_trait]
impl ServerRepository for MemoryServerRepository {
    async fn list(&self) -> Result<Vec<McpServer>, RepositoryError> {
        Ok(self.servers.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<McpServer, RepositoryError> {
        self.servers
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("server id={id}")))
    }

    async fn insert(&self, server: McpServer) -> Result<(), RepositoryError> {
        let mut servers = self.servers.write().await;
        if servers.iter().any(|s| s.id == server.id) {
            return Err(RepositoryError::AlreadyExists(format!(
                "server id={}",
                server.id
            )));
        }
        servers.push(server);
        Ok(())
    }

    async fn set_verified(&self, id: &str) -> Result<McpServer, RepositoryError> {
        let mut servers = self.servers.write().await;
        servers.iter_mut().find(|s| s.id == id).map_or_else(
            || Err(RepositoryError::NotFound(format!("server id={id}"))),
            |s| {
                s.verified = true;
                Ok(s.clone())
            },
        )
    }

    async fn remove(&self, id: &str) -> Result<(), RepositoryError> {
        let mut servers = self.servers.write().await;
        let len_before = servers.len();
        servers.retain(|s| s.id != id);
        if servers.len() == len_before {
            Err(RepositoryError::NotFound(format!("server id={id}")))
        } else {
            Ok(())
        }
    }
}
