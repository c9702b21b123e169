//! Integration tests for the directory services over memory backends.
//!
//! These tests drive the same service facades an embedding UI would
//! call, with all simulated latencies zeroed so the suite stays fast.

mod common;

use std::sync::Arc;

use mcphub_core::catalog::{PageRequest, ServerFilter, ServerSort, UserFilter};
use mcphub_core::domain::server::{NewServer, ServerCategory};
use mcphub_core::domain::stats::{ActivityCounters, PlatformStats};
use mcphub_core::domain::user::{UserRole, UserStatus};
use mcphub_core::latency::Latency;
use mcphub_core::services::{CatalogService, StatsService};
use mcphub_mock::{CoreFactory, MemoryServerRepository};

use common::{demo_catalog, seeded_core};

#[tokio::test]
async fn seeded_catalog_fits_one_default_page() {
    let core = seeded_core();

    let page = core
        .catalog()
        .list(&ServerFilter::new(), None, PageRequest::first())
        .await
        .unwrap();

    assert_eq!(page.total, 12);
    assert_eq!(page.data.len(), 12);
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn large_catalog_pages_by_twelve() {
    let repo = Arc::new(MemoryServerRepository::with_servers(demo_catalog(25)));
    let catalog = CatalogService::new(repo, Latency::zero());
    let filter = ServerFilter::new();

    let first = catalog
        .list(&filter, None, PageRequest::page(1))
        .await
        .unwrap();
    assert_eq!(first.data.len(), 12);
    assert_eq!(first.total, 25);
    assert_eq!(first.total_pages, 3);

    let last = catalog
        .list(&filter, None, PageRequest::page(3))
        .await
        .unwrap();
    assert_eq!(last.data.len(), 1);

    // Beyond the last page: empty data, totals unchanged
    let beyond = catalog
        .list(&filter, None, PageRequest::page(4))
        .await
        .unwrap();
    assert!(beyond.data.is_empty());
    assert_eq!(beyond.total, 25);
    assert_eq!(beyond.total_pages, 3);
}

#[tokio::test]
async fn filters_narrow_the_seeded_catalog() {
    let core = seeded_core();

    let databases = core
        .catalog()
        .list(
            &ServerFilter::new().with_category(ServerCategory::Database),
            None,
            PageRequest::first(),
        )
        .await
        .unwrap();
    assert_eq!(databases.total, 1);
    assert_eq!(databases.data[0].id, "server-postgres");

    // "All" sentinels decode to no constraint; search stays in effect
    let searched = core
        .catalog()
        .list(
            &ServerFilter::from_query(Some("All"), Some("all"), None, Some("translation")),
            None,
            PageRequest::first(),
        )
        .await
        .unwrap();
    assert_eq!(searched.total, 1);
    assert_eq!(searched.data[0].id, "server-deepl");
}

#[tokio::test]
async fn sort_orders_rank_the_catalog() {
    let core = seeded_core();
    let filter = ServerFilter::new();

    let popular = core
        .catalog()
        .list(&filter, Some(ServerSort::Popular), PageRequest::first())
        .await
        .unwrap();
    assert_eq!(popular.data[0].id, "server-github");

    let rated = core
        .catalog()
        .list(&filter, Some(ServerSort::Rating), PageRequest::first())
        .await
        .unwrap();
    assert_eq!(rated.data[0].id, "server-postgres");

    let recent = core
        .catalog()
        .list(&filter, Some(ServerSort::Recent), PageRequest::first())
        .await
        .unwrap();
    assert_eq!(recent.data[0].id, "server-huggingface");
}

#[tokio::test]
async fn register_verify_reject_lifecycle() {
    let catalog = CatalogService::new(CoreFactory::server_repository(), Latency::zero());

    let created = catalog
        .create(
            NewServer::new(
                "Linear",
                "Issue tracking and project planning from Linear",
                ServerCategory::Productivity,
                "https://mcp.linear.app",
            )
            .with_publisher("Linear"),
        )
        .await
        .unwrap();
    assert!(created.id.starts_with("server-"));
    assert!(!created.verified);

    let verified = catalog.verify(&created.id).await.unwrap().unwrap();
    assert!(verified.verified);

    assert!(catalog.reject(&created.id).await.unwrap());
    assert!(catalog.get(&created.id).await.unwrap().is_none());
    assert!(!catalog.reject(&created.id).await.unwrap());
}

#[tokio::test]
async fn stats_summarize_the_seeded_platform() {
    let core = seeded_core();

    let stats = core.stats().get().await.unwrap();

    assert_eq!(stats.total_servers, 12);
    assert_eq!(stats.total_users, 8);
    assert_eq!(stats.pending_approvals, 3);
    assert_eq!(stats.healthy_servers, 9);
    assert_eq!(stats.degraded_servers, 2);
    assert_eq!(stats.offline_servers, 1);
    assert_eq!(stats.api_calls, 12_847);
}

#[tokio::test]
async fn empty_platform_reports_an_empty_dashboard() {
    let stats = StatsService::new(
        CoreFactory::server_repository(),
        CoreFactory::user_repository(),
        CoreFactory::stats_repository(ActivityCounters::default()),
        Latency::zero(),
    );

    assert_eq!(stats.get().await.unwrap(), PlatformStats::default());
}

#[tokio::test]
async fn user_directory_filters_and_updates_status() {
    let core = seeded_core();

    let developers = core
        .users()
        .list(
            &UserFilter::new().with_role(UserRole::Developer),
            PageRequest::first(),
        )
        .await
        .unwrap();
    assert_eq!(developers.total, 3);

    let reinstated = core
        .users()
        .update_status("user-5", UserStatus::Active)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reinstated.status, UserStatus::Active);

    let missing = core
        .users()
        .update_status("user-99", UserStatus::Suspended)
        .await
        .unwrap();
    assert!(missing.is_none());
}
