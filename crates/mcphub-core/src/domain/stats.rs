//! Platform statistics snapshot.

use serde::{Deserialize, Serialize};

use super::server::{McpServer, ServerStatus};

/// Activity counters the catalog cannot derive from its own records.
///
/// These are seeded by the stats repository; everything else in
/// [`PlatformStats`] is computed live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCounters {
    /// Accounts seen in the last 24 hours.
    pub active_today: usize,

    /// API calls served in the last 24 hours.
    pub api_calls: usize,
}

/// Dashboard snapshot of the whole platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub total_servers: usize,
    pub total_users: usize,
    pub active_today: usize,
    pub api_calls: usize,
    /// Servers awaiting admin verification.
    pub pending_approvals: usize,
    pub healthy_servers: usize,
    pub degraded_servers: usize,
    pub offline_servers: usize,
}

impl PlatformStats {
    /// Compute a snapshot from the current catalog state.
    ///
    /// Healthy means online; the three health buckets always sum to the
    /// server total.
    #[must_use]
    pub fn compute(servers: &[McpServer], total_users: usize, activity: ActivityCounters) -> Self {
        let count_status =
            |status: ServerStatus| servers.iter().filter(|s| s.status == status).count();

        Self {
            total_servers: servers.len(),
            total_users,
            active_today: activity.active_today,
            api_calls: activity.api_calls,
            pending_approvals: servers.iter().filter(|s| !s.verified).count(),
            healthy_servers: count_status(ServerStatus::Online),
            degraded_servers: count_status(ServerStatus::Degraded),
            offline_servers: count_status(ServerStatus::Offline),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::server::{NewServer, ServerCategory};
    use chrono::NaiveDate;

    fn server(id: &str, status: ServerStatus, verified: bool) -> McpServer {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut server = NewServer::new(
            format!("Server {id}"),
            "A server used for computing statistics",
            ServerCategory::DeveloperTools,
            "https://mcp.example.com",
        )
        .into_server(id.to_string(), today);
        server.status = status;
        server.verified = verified;
        server
    }

    #[test]
    fn test_compute_counts_health_and_approvals() {
        let servers = vec![
            server("a", ServerStatus::Online, true),
            server("b", ServerStatus::Online, false),
            server("c", ServerStatus::Degraded, true),
            server("d", ServerStatus::Offline, false),
        ];
        let activity = ActivityCounters {
            active_today: 250,
            api_calls: 12_400,
        };

        let stats = PlatformStats::compute(&servers, 9, activity);

        assert_eq!(stats.total_servers, 4);
        assert_eq!(stats.total_users, 9);
        assert_eq!(stats.pending_approvals, 2);
        assert_eq!(stats.healthy_servers, 2);
        assert_eq!(stats.degraded_servers, 1);
        assert_eq!(stats.offline_servers, 1);
        assert_eq!(
            stats.healthy_servers + stats.degraded_servers + stats.offline_servers,
            stats.total_servers
        );
        assert_eq!(stats.api_calls, 12_400);
    }

    #[test]
    fn test_compute_empty_catalog() {
        let stats = PlatformStats::compute(&[], 0, ActivityCounters::default());
        assert_eq!(stats, PlatformStats::default());
    }
}
