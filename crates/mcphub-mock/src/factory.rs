//! Composition utilities for building `AppCore` with in-memory backends.
//!
//! This module provides factory functions for wiring up the platform
//! with memory repositories, either empty or carrying the seed catalog.
//! It is focused purely on construction and should not contain any
//! domain logic.

use std::sync::Arc;

use mcphub_core::Repos;
use mcphub_core::domain::stats::ActivityCounters;
use mcphub_core::latency::Latency;
use mcphub_core::services::AppCore;

use crate::repositories::{
    MemoryServerRepository, MemoryStatsRepository, MemoryTokenStore, MemoryUserRepository,
};
use crate::seed;

/// Factory for creating repository instances with in-memory backends.
///
/// This struct provides composition utilities only, no domain logic.
pub struct CoreFactory;

impl CoreFactory {
    /// Build empty memory repositories.
    ///
    /// Returns a `Repos` struct from `mcphub-core` containing
    /// trait-object-wrapped repositories with no rows and zeroed
    /// activity counters.
    pub fn build_repos() -> Repos {
        Repos::new(
            Arc::new(MemoryServerRepository::new()),
            Arc::new(MemoryUserRepository::new()),
            Arc::new(MemoryStatsRepository::default()),
            Arc::new(MemoryTokenStore::new()),
        )
    }

    /// Build memory repositories pre-populated with the seed content.
    pub fn build_seeded_repos() -> Repos {
        Repos::new(
            Arc::new(MemoryServerRepository::with_servers(seed::seed_servers())),
            Arc::new(MemoryUserRepository::with_users(seed::seed_users())),
            Arc::new(MemoryStatsRepository::new(seed::seed_activity())),
            Arc::new(MemoryTokenStore::new()),
        )
    }

    /// Build a complete `AppCore` over empty repositories.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos();
    /// let core = AppCore::new(repos, latency);
    /// ```
    pub fn build_app_core(latency: Latency) -> AppCore {
        AppCore::new(Self::build_repos(), latency)
    }

    /// Build a complete `AppCore` over the seed content.
    ///
    /// This is the recommended single-step way for adapters to obtain a
    /// demo-ready platform.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use mcphub_core::latency::Latency;
    /// use mcphub_mock::CoreFactory;
    ///
    /// let core = CoreFactory::build_seeded_app_core(Latency::default());
    /// let page = core.catalog().list(&filter, None, PageRequest::first()).await?;
    /// ```
    pub fn build_seeded_app_core(latency: Latency) -> AppCore {
        AppCore::new(Self::build_seeded_repos(), latency)
    }

    /// Create an empty server repository.
    pub fn server_repository() -> Arc<MemoryServerRepository> {
        Arc::new(MemoryServerRepository::new())
    }

    /// Create an empty user repository.
    pub fn user_repository() -> Arc<MemoryUserRepository> {
        Arc::new(MemoryUserRepository::new())
    }

    /// Create a stats repository reporting the given counters.
    pub fn stats_repository(activity: ActivityCounters) -> Arc<MemoryStatsRepository> {
        Arc::new(MemoryStatsRepository::new(activity))
    }

    /// Create an empty token store.
    pub fn token_store() -> Arc<MemoryTokenStore> {
        Arc::new(MemoryTokenStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_repos_starts_empty() {
        let repos = CoreFactory::build_repos();

        assert!(repos.servers.list().await.unwrap().is_empty());
        assert!(repos.users.list().await.unwrap().is_empty());
        assert_eq!(repos.tokens.token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_build_seeded_repos_carries_the_seed() {
        let repos = CoreFactory::build_seeded_repos();

        assert_eq!(
            repos.servers.list().await.unwrap(),
            seed::seed_servers()
        );
        assert_eq!(repos.users.list().await.unwrap().len(), seed::seed_users().len());
        assert_eq!(repos.stats.activity().await.unwrap(), seed::seed_activity());
    }
}
