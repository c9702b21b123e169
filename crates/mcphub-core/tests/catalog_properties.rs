//! Property-based tests for the catalog query engine
//!
//! These tests verify invariants that must hold for all inputs:
//! - Filtering returns exactly the matching subset, in input order
//! - Totals are independent of page and limit
//! - Page math is consistent with the filtered total
//! - Sorting is descending on its key and stable across ties
//!
//! Run with: cargo test --test catalog_properties

use proptest::prelude::*;

use chrono::{Datelike, NaiveDate};
use mcphub_core::catalog::{self, PageRequest, ServerFilter, ServerSort};
use mcphub_core::domain::server::{
    McpServer, NewServer, SecurityGrade, ServerCategory, ServerStatus, Tool,
};

fn category_strategy() -> impl Strategy<Value = ServerCategory> {
    prop_oneof![
        Just(ServerCategory::DeveloperTools),
        Just(ServerCategory::Database),
        Just(ServerCategory::Finance),
        Just(ServerCategory::Productivity),
    ]
}

fn status_strategy() -> impl Strategy<Value = ServerStatus> {
    prop_oneof![
        Just(ServerStatus::Online),
        Just(ServerStatus::Degraded),
        Just(ServerStatus::Offline),
    ]
}

fn grade_strategy() -> impl Strategy<Value = SecurityGrade> {
    prop_oneof![
        Just(SecurityGrade::A),
        Just(SecurityGrade::B),
        Just(SecurityGrade::C),
    ]
}

prop_compose! {
    fn arb_server()(
        name in "[a-z]{3,12}",
        category in category_strategy(),
        status in status_strategy(),
        grade in grade_strategy(),
        downloads in 0u64..100_000,
        rating in 0.0f64..5.0,
        tool_count in 0usize..6,
        day in 1u32..28,
    ) -> McpServer {
        let updated = NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
        let mut server = NewServer::new(
            name.clone(),
            format!("{name} does something useful over MCP"),
            category,
            "https://mcp.example.com",
        )
        .into_server(String::new(), updated);
        server.status = status;
        server.security_grade = grade;
        server.downloads = downloads;
        server.rating = rating;
        server.tools = (0..tool_count)
            .map(|t| Tool::new(format!("tool-{t}"), format!("tool_{t}"), "generated tool"))
            .collect();
        server
    }
}

/// A generated catalog with ids assigned by input position, so tests
/// can recover the original order of any row.
fn arb_catalog() -> impl Strategy<Value = Vec<McpServer>> {
    proptest::collection::vec(arb_server(), 0..40).prop_map(|mut servers| {
        for (i, server) in servers.iter_mut().enumerate() {
            server.id = i.to_string();
        }
        servers
    })
}

fn arb_filter() -> impl Strategy<Value = ServerFilter> {
    (
        proptest::option::of(category_strategy()),
        proptest::option::of(status_strategy()),
        proptest::option::of(grade_strategy()),
        proptest::option::of("[a-z]{1,3}"),
    )
        .prop_map(|(category, status, security_grade, search)| ServerFilter {
            category,
            status,
            security_grade,
            search,
        })
}

/// A page request wide enough to hold the whole catalog.
fn whole_catalog(servers: &[McpServer]) -> PageRequest {
    PageRequest::sized(1, servers.len().max(1))
}

// ============================================================================
// FILTER TESTS
// ============================================================================

mod filter_tests {
    use super::*;

    proptest! {
        /// Invariant: every returned item satisfies every supplied predicate
        #[test]
        fn returned_items_satisfy_all_predicates(
            servers in arb_catalog(),
            filter in arb_filter(),
        ) {
            let request = whole_catalog(&servers);
            let page = catalog::query_servers(servers, &filter, None, request);
            for server in &page.data {
                prop_assert!(filter.matches(server));
            }
        }

        /// Invariant: the unsorted full page is exactly the matching
        /// subsequence of the input, in input order
        #[test]
        fn filtering_keeps_input_order_and_nothing_else(
            servers in arb_catalog(),
            filter in arb_filter(),
        ) {
            let expected: Vec<String> = servers
                .iter()
                .filter(|s| filter.matches(s))
                .map(|s| s.id.clone())
                .collect();

            let request = whole_catalog(&servers);
            let page = catalog::query_servers(servers, &filter, None, request);
            let returned: Vec<String> = page.data.iter().map(|s| s.id.clone()).collect();

            prop_assert_eq!(returned, expected);
        }
    }
}

// ============================================================================
// PAGINATION TESTS
// ============================================================================

mod pagination_tests {
    use super::*;

    proptest! {
        /// Invariant: `total` equals the filtered count regardless of
        /// page and limit
        #[test]
        fn total_is_independent_of_the_slice(
            servers in arb_catalog(),
            filter in arb_filter(),
            page in 1usize..20,
            limit in 1usize..30,
        ) {
            let expected = servers.iter().filter(|s| filter.matches(s)).count();
            let result =
                catalog::query_servers(servers, &filter, None, PageRequest::sized(page, limit));
            prop_assert_eq!(result.total, expected);
        }

        /// Invariant: `total_pages == ceil(total / limit)`
        #[test]
        fn total_pages_is_the_ceiling(
            servers in arb_catalog(),
            page in 1usize..20,
            limit in 1usize..30,
        ) {
            let result = catalog::query_servers(
                servers,
                &ServerFilter::new(),
                None,
                PageRequest::sized(page, limit),
            );
            prop_assert_eq!(result.total_pages, result.total.div_ceil(limit));
        }

        /// Invariant: a page past the end is empty but reports the real
        /// totals
        #[test]
        fn beyond_range_is_empty(
            servers in arb_catalog(),
            limit in 1usize..30,
        ) {
            let total = servers.len();
            let past_the_end = total.div_ceil(limit) + 1;
            let result = catalog::query_servers(
                servers,
                &ServerFilter::new(),
                None,
                PageRequest::sized(past_the_end, limit),
            );
            prop_assert!(result.data.is_empty());
            prop_assert_eq!(result.total, total);
        }

        /// Invariant: the slice matches skip/take over the full listing
        #[test]
        fn slice_matches_skip_take(
            servers in arb_catalog(),
            page in 1usize..20,
            limit in 1usize..30,
        ) {
            let expected: Vec<String> = servers
                .iter()
                .skip((page - 1) * limit)
                .take(limit)
                .map(|s| s.id.clone())
                .collect();
            let result = catalog::query_servers(
                servers,
                &ServerFilter::new(),
                None,
                PageRequest::sized(page, limit),
            );
            let returned: Vec<String> = result.data.iter().map(|s| s.id.clone()).collect();
            prop_assert_eq!(returned, expected);
        }
    }
}

// ============================================================================
// SORT TESTS
// ============================================================================

mod sort_tests {
    use super::*;

    #[allow(clippy::cast_precision_loss)]
    fn key(sort: ServerSort, server: &McpServer) -> f64 {
        match sort {
            ServerSort::Popular => server.downloads as f64,
            ServerSort::Rating => server.rating,
            ServerSort::Tools => server.tools.len() as f64,
            ServerSort::Recent => f64::from(server.last_updated.num_days_from_ce()),
        }
    }

    fn sort_strategy() -> impl Strategy<Value = ServerSort> {
        prop_oneof![
            Just(ServerSort::Popular),
            Just(ServerSort::Rating),
            Just(ServerSort::Tools),
            Just(ServerSort::Recent),
        ]
    }

    proptest! {
        /// Invariant: every sort key yields a non-increasing sequence
        #[test]
        fn sorted_output_is_non_increasing(
            servers in arb_catalog(),
            sort in sort_strategy(),
        ) {
            let request = whole_catalog(&servers);
            let page = catalog::query_servers(servers, &ServerFilter::new(), Some(sort), request);
            for pair in page.data.windows(2) {
                prop_assert!(key(sort, &pair[0]) >= key(sort, &pair[1]));
            }
        }

        /// Invariant: items with equal keys preserve relative input order
        #[test]
        fn ties_preserve_input_order(
            mut servers in arb_catalog(),
            sort in sort_strategy(),
        ) {
            // Collapse the key space so ties are common
            for server in &mut servers {
                server.downloads %= 3;
                server.rating = if server.downloads == 0 { 0.0 } else { 1.0 };
                server.tools.truncate(2);
            }

            let request = whole_catalog(&servers);
            let page = catalog::query_servers(servers, &ServerFilter::new(), Some(sort), request);
            for pair in page.data.windows(2) {
                let same_key = (key(sort, &pair[0]) - key(sort, &pair[1])).abs() < f64::EPSILON;
                if same_key {
                    let first: usize = pair[0].id.parse().unwrap();
                    let second: usize = pair[1].id.parse().unwrap();
                    prop_assert!(first < second);
                }
            }
        }
    }
}
