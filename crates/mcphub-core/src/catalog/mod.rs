//! The catalog query engine: filter, sort, and paginate listings.
//!
//! Listings are evaluated as a pipeline over an owned snapshot of the
//! stored rows. Filtering happens first so that totals and page counts
//! describe the filtered set, then the optional sort reorders what is
//! left, and pagination cuts the final slice:
//!
//! - [`filter`] - predicate types for server and user listings
//! - [`sort`] - descending sort keys for server listings
//! - [`page`] - page requests, page envelopes, and the slicing itself
//!
//! User listings have no sort keys; they stay in stored order.

pub mod filter;
pub mod page;
pub mod sort;

// Re-export the query pipeline types at the catalog level for convenience
pub use filter::{ServerFilter, UserFilter};
pub use page::{DEFAULT_SERVER_PAGE_SIZE, DEFAULT_USER_PAGE_SIZE, Page, PageRequest, paginate};
pub use sort::ServerSort;

use crate::domain::server::McpServer;
use crate::domain::user::User;

/// Run the full listing pipeline over a snapshot of servers.
#[must_use]
pub fn query_servers(
    servers: Vec<McpServer>,
    filter: &ServerFilter,
    sort: Option<ServerSort>,
    page: PageRequest,
) -> Page<McpServer> {
    let mut filtered: Vec<McpServer> = servers.into_iter().filter(|s| filter.matches(s)).collect();
    if let Some(sort) = sort {
        sort.apply(&mut filtered);
    }
    paginate(filtered, page, DEFAULT_SERVER_PAGE_SIZE)
}

/// Run the listing pipeline over a snapshot of users.
#[must_use]
pub fn query_users(users: Vec<User>, filter: &UserFilter, page: PageRequest) -> Page<User> {
    let filtered: Vec<User> = users.into_iter().filter(|u| filter.matches(u)).collect();
    paginate(filtered, page, DEFAULT_USER_PAGE_SIZE)
}
