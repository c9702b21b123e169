//! Shared fixtures for the mcphub-mock integration tests.

use chrono::NaiveDate;

use mcphub_core::domain::server::{McpServer, NewServer, ServerCategory};
use mcphub_core::latency::Latency;
use mcphub_core::services::AppCore;
use mcphub_mock::CoreFactory;

/// A seeded platform with every latency zeroed, so suites stay fast.
pub fn seeded_core() -> AppCore {
    CoreFactory::build_seeded_app_core(Latency::zero())
}

/// Build a synthetic catalog of `count` servers with ids `server-0..`.
///
/// Downloads decrease with position so the popular sort has a known
/// winner.
// Allow unused: only the catalog suite builds synthetic rows
#[allow(dead_code)]
pub fn demo_catalog(count: usize) -> Vec<McpServer> {
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
    (0..count)
        .map(|i| {
            let mut server = NewServer::new(
                format!("Demo Server {i}"),
                "A synthetic catalog entry used by the integration suite",
                ServerCategory::DeveloperTools,
                "https://mcp.example.com/demo",
            )
            .into_server(format!("server-{i}"), today);
            server.downloads = (count - i) as u64;
            server
        })
        .collect()
}
