//! The session's set of adopted catalog servers.

use std::collections::HashSet;

use mcphub_core::domain::server::McpServer;

/// Servers a session has picked out of the catalog, plus which of them
/// are currently active.
///
/// Entries keep adoption order. The active set only ever holds ids of
/// owned entries: adding activates, removing deactivates, and
/// [`toggle_active`](Self::toggle_active) refuses ids the toolbox does
/// not own rather than growing a dangling flag.
#[derive(Debug, Clone, Default)]
pub struct ToolboxStore {
    entries: Vec<McpServer>,
    active: HashSet<String>,
}

impl ToolboxStore {
    /// Create an empty toolbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a server. New entries start active; re-adding an owned id
    /// changes nothing.
    pub fn add_server(&mut self, server: McpServer) {
        if self.is_in_toolbox(&server.id) {
            return;
        }
        self.active.insert(server.id.clone());
        self.entries.push(server);
    }

    /// Drop a server and its active flag. Unknown ids are ignored.
    pub fn remove_server(&mut self, id: &str) {
        self.entries.retain(|s| s.id != id);
        self.active.remove(id);
    }

    /// Flip the active flag of an owned server. No-op for ids the
    /// toolbox does not own.
    pub fn toggle_active(&mut self, id: &str) {
        if !self.is_in_toolbox(id) {
            return;
        }
        if !self.active.remove(id) {
            self.active.insert(id.to_string());
        }
    }

    /// Whether the toolbox owns this server.
    #[must_use]
    pub fn is_in_toolbox(&self, id: &str) -> bool {
        self.entries.iter().any(|s| s.id == id)
    }

    /// Whether this server is owned and active.
    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active.contains(id)
    }

    /// All owned servers, in adoption order.
    #[must_use]
    pub fn servers(&self) -> &[McpServer] {
        &self.entries
    }

    /// The active servers, in adoption order.
    #[must_use]
    pub fn active_servers(&self) -> Vec<McpServer> {
        self.entries
            .iter()
            .filter(|s| self.active.contains(&s.id))
            .cloned()
            .collect()
    }

    /// Number of owned servers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the toolbox owns nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tools across all owned servers, recomputed on demand.
    #[must_use]
    pub fn total_tools_count(&self) -> usize {
        self.entries.iter().map(McpServer::tool_count).sum()
    }

    /// Tools across active servers only, recomputed on demand.
    #[must_use]
    pub fn active_tools_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|s| self.active.contains(&s.id))
            .map(|s| s.tool_count())
            .sum()
    }
}
