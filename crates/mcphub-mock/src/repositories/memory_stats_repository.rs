//! In-memory implementation of the stats repository.
//!
//! Activity counters have no mutation path in the platform API, so
//! this holds a plain value fixed at construction.

use async_trait::async_trait;

use mcphub_core::domain::stats::ActivityCounters;
use mcphub_core::ports::{RepositoryError, StatsRepository};

/// In-memory stats repository.
#[derive(Default)]
pub struct MemoryStatsRepository {
    activity: ActivityCounters,
}

impl MemoryStatsRepository {
    /// Create a repository reporting the given counters.
    #[must_use]
    pub const fn new(activity: ActivityCounters) -> Self {
        Self { activity }
    }
}

#[async_trait]
impl StatsRepository for MemoryStatsRepository {
    async fn activity(&self) -> Result<ActivityCounters, RepositoryError> {
        Ok(self.activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reports_the_constructed_counters() {
        let counters = ActivityCounters {
            active_today: 7,
            api_calls: 900,
        };
        let repo = MemoryStatsRepository::new(counters);
        assert_eq!(repo.activity().await.unwrap(), counters);
    }
}
