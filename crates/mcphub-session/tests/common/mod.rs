//! Shared fixtures for the mcphub-session integration tests.

use mcphub_core::domain::server::McpServer;
use mcphub_mock::seed_servers;

/// Pull one server out of the seed catalog by id.
pub fn seeded(id: &str) -> McpServer {
    seed_servers()
        .into_iter()
        .find(|s| s.id == id)
        .expect("seeded id")
}
