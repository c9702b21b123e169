//! Sort orders for server listings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::server::McpServer;

/// Descending sort keys offered by the directory UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerSort {
    /// Most downloads first.
    Popular,
    /// Most recently updated first.
    Recent,
    /// Highest community rating first.
    Rating,
    /// Largest toolset first.
    Tools,
}

impl ServerSort {
    /// Parse a sort key from its wire form.
    ///
    /// `None` means "leave the listing in its stored order", which is
    /// also what unrecognized keys decode to.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "popular" => Some(Self::Popular),
            "recent" => Some(Self::Recent),
            "rating" => Some(Self::Rating),
            "tools" => Some(Self::Tools),
            _ => None,
        }
    }

    /// Wire form of the sort key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Recent => "recent",
            Self::Rating => "rating",
            Self::Tools => "tools",
        }
    }

    /// Sort servers in place, descending on the key.
    ///
    /// Uses a stable sort, so servers that compare equal keep their
    /// relative order from the input.
    pub fn apply(self, servers: &mut [McpServer]) {
        match self {
            Self::Popular => servers.sort_by(|a, b| b.downloads.cmp(&a.downloads)),
            Self::Recent => servers.sort_by(|a, b| b.last_updated.cmp(&a.last_updated)),
            Self::Rating => servers.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            Self::Tools => servers.sort_by(|a, b| b.tools.len().cmp(&a.tools.len())),
        }
    }
}

impl fmt::Display for ServerSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
