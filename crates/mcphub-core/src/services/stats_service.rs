//! Stats service - the admin dashboard snapshot.

use std::sync::Arc;

use crate::domain::stats::PlatformStats;
use crate::latency::Latency;
use crate::ports::{CoreError, ServerRepository, StatsRepository, UserRepository};

/// Service assembling the platform statistics snapshot.
///
/// Totals, the health breakdown, and pending approvals are computed
/// live from the repositories on every call; only the activity counters
/// come from seeded storage.
pub struct StatsService {
    servers: Arc<dyn ServerRepository>,
    users: Arc<dyn UserRepository>,
    stats: Arc<dyn StatsRepository>,
    latency: Latency,
}

impl StatsService {
    /// Create a new stats service over the given repositories.
    pub const fn new(
        servers: Arc<dyn ServerRepository>,
        users: Arc<dyn UserRepository>,
        stats: Arc<dyn StatsRepository>,
        latency: Latency,
    ) -> Self {
        Self {
            servers,
            users,
            stats,
            latency,
        }
    }

    /// Compute the current snapshot.
    pub async fn get(&self) -> Result<PlatformStats, CoreError> {
        self.latency.catalog().await;
        let servers = self.servers.list().await.map_err(CoreError::from)?;
        let users = self.users.list().await.map_err(CoreError::from)?;
        let activity = self.stats.activity().await.map_err(CoreError::from)?;
        Ok(PlatformStats::compute(&servers, users.len(), activity))
    }
}
