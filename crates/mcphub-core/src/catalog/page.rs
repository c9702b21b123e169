//! Pagination of catalog listings.
//!
//! Requests carry optional one-based page numbers; responses carry the
//! page slice plus the totals the UI needs to render pager controls.

use serde::{Deserialize, Serialize};

/// Page size used for server listings when the request leaves it out.
pub const DEFAULT_SERVER_PAGE_SIZE: usize = 12;

/// Page size used for user listings when the request leaves it out.
pub const DEFAULT_USER_PAGE_SIZE: usize = 20;

/// An optional slice of a listing, one-based.
///
/// `None` and `0` both fall back to the defaults: page 1, and the
/// listing's own page size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    /// One-based page number.
    pub page: Option<usize>,

    /// Items per page.
    pub limit: Option<usize>,
}

impl PageRequest {
    /// The whole first page, default size.
    #[must_use]
    pub const fn first() -> Self {
        Self {
            page: None,
            limit: None,
        }
    }

    /// Request a specific page at the default size.
    #[must_use]
    pub const fn page(page: usize) -> Self {
        Self {
            page: Some(page),
            limit: None,
        }
    }

    /// Request a specific page and size.
    #[must_use]
    pub const fn sized(page: usize, limit: usize) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// Resolve absent or zero values to concrete ones.
    #[must_use]
    pub fn resolve(self, default_limit: usize) -> (usize, usize) {
        let page = self.page.filter(|p| *p > 0).unwrap_or(1);
        let limit = self.limit.filter(|l| *l > 0).unwrap_or(default_limit);
        (page, limit)
    }
}

/// One page of a listing, with the totals for the full filtered set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items on this page, in listing order.
    pub data: Vec<T>,

    /// Total items across all pages, after filtering.
    pub total: usize,

    /// The one-based page this slice came from.
    pub page: usize,

    /// The page size the slice was cut with.
    pub limit: usize,

    /// Total number of pages at this size.
    pub total_pages: usize,
}

/// Cut one page out of a fully filtered and sorted listing.
///
/// Pages past the end come back empty but still report the real totals.
#[must_use]
pub fn paginate<T>(items: Vec<T>, request: PageRequest, default_limit: usize) -> Page<T> {
    let (page, limit) = request.resolve(default_limit);
    let total = items.len();
    let total_pages = total.div_ceil(limit);
    let start = (page - 1).saturating_mul(limit);

    let data = if start >= total {
        Vec::new()
    } else {
        items.into_iter().skip(start).take(limit).collect()
    };

    Page {
        data,
        total,
        page,
        limit,
        total_pages,
    }
}
