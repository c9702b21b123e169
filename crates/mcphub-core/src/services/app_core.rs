//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Embedding frontends
//! receive an `AppCore` instance and use it to access all functionality.

use std::sync::Arc;

use crate::latency::Latency;
use crate::ports::Repos;

use super::{AuthService, CatalogService, StatsService, UserService};

/// The core application facade.
///
/// `AppCore` provides access to all core services. It's constructed at
/// the adapter's composition root with concrete repository
/// implementations and one shared latency profile.
///
/// # Example
///
/// ```ignore
/// let repos = mcphub_mock::factory::CoreFactory::build_repos();
/// let core = AppCore::new(repos, Latency::default());
///
/// // Access services
/// let page = core.catalog().list(&filter, None, PageRequest::first()).await?;
/// ```
pub struct AppCore {
    catalog: CatalogService,
    users: UserService,
    stats: StatsService,
    auth: AuthService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories and latency
    /// profile.
    pub fn new(repos: Repos, latency: Latency) -> Self {
        let Repos {
            servers,
            users,
            stats,
            tokens,
        } = repos;
        Self {
            catalog: CatalogService::new(Arc::clone(&servers), latency),
            users: UserService::new(Arc::clone(&users), latency),
            stats: StatsService::new(servers, users, stats, latency),
            auth: AuthService::new(tokens, latency),
        }
    }

    /// Access the catalog service.
    pub const fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    /// Access the user service.
    pub const fn users(&self) -> &UserService {
        &self.users
    }

    /// Access the stats service.
    pub const fn stats(&self) -> &StatsService {
        &self.stats
    }

    /// Access the auth service.
    pub const fn auth(&self) -> &AuthService {
        &self.auth
    }
}
