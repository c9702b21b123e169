//! Stats repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::stats::ActivityCounters;

/// Source of the activity counters that cannot be derived from the
/// catalog or the user table.
///
/// Everything else on the dashboard (server totals, health buckets,
/// pending approvals) is computed live by `StatsService`.
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Read the current activity counters.
    async fn activity(&self) -> Result<ActivityCounters, RepositoryError>;
}
