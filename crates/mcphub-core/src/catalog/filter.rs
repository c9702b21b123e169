//! Filter predicates for catalog listings.
//!
//! Filters are independent predicates ANDed together; an absent field
//! means no constraint. The search predicate is a case-insensitive
//! substring match.

use serde::{Deserialize, Serialize};

use crate::domain::server::{McpServer, SecurityGrade, ServerCategory, ServerStatus};
use crate::domain::user::{User, UserRole};

/// Predicates applied to a server listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerFilter {
    /// Keep only servers in this category.
    pub category: Option<ServerCategory>,

    /// Keep only servers with this health status.
    pub status: Option<ServerStatus>,

    /// Keep only servers with this trust grade.
    pub security_grade: Option<SecurityGrade>,

    /// Case-insensitive substring match on name, description, or publisher.
    pub search: Option<String>,
}

impl ServerFilter {
    /// A filter with no constraints.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            category: None,
            status: None,
            security_grade: None,
            search: None,
        }
    }

    /// Decode query-string style values.
    ///
    /// The UI sends the sentinel `"All"`/`"all"` for "no constraint";
    /// that sentinel, an empty string, and unrecognized values all decode
    /// to an absent predicate. The search term is taken verbatim.
    #[must_use]
    pub fn from_query(
        category: Option<&str>,
        status: Option<&str>,
        security_grade: Option<&str>,
        search: Option<&str>,
    ) -> Self {
        Self {
            category: constraint(category).and_then(ServerCategory::parse),
            status: constraint(status).and_then(ServerStatus::parse),
            security_grade: constraint(security_grade).and_then(SecurityGrade::parse),
            search: search.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }

    /// Constrain by category.
    #[must_use]
    pub const fn with_category(mut self, category: ServerCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Constrain by status.
    #[must_use]
    pub const fn with_status(mut self, status: ServerStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Constrain by security grade.
    #[must_use]
    pub const fn with_security_grade(mut self, grade: SecurityGrade) -> Self {
        self.security_grade = Some(grade);
        self
    }

    /// Constrain by search term.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Whether a server satisfies every supplied predicate.
    #[must_use]
    pub fn matches(&self, server: &McpServer) -> bool {
        if self.category.is_some_and(|c| server.category != c) {
            return false;
        }
        if self.status.is_some_and(|s| server.status != s) {
            return false;
        }
        if self.security_grade.is_some_and(|g| server.security_grade != g) {
            return false;
        }
        if let Some(query) = &self.search {
            let query = query.to_lowercase();
            let hit = server.name.to_lowercase().contains(&query)
                || server.description.to_lowercase().contains(&query)
                || server.publisher.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Predicates applied to a user listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserFilter {
    /// Keep only users with this role.
    pub role: Option<UserRole>,

    /// Case-insensitive substring match on username or email.
    pub search: Option<String>,
}

impl UserFilter {
    /// A filter with no constraints.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            role: None,
            search: None,
        }
    }

    /// Decode query-string style values; see [`ServerFilter::from_query`].
    #[must_use]
    pub fn from_query(role: Option<&str>, search: Option<&str>) -> Self {
        Self {
            role: constraint(role).and_then(UserRole::parse),
            search: search.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }

    /// Constrain by role.
    #[must_use]
    pub const fn with_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Constrain by search term.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Whether a user satisfies every supplied predicate.
    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        if self.role.is_some_and(|r| user.role != r) {
            return false;
        }
        if let Some(query) = &self.search {
            let query = query.to_lowercase();
            let hit = user.username.to_lowercase().contains(&query)
                || user.email.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Strip sentinel and empty values down to a real constraint.
fn constraint(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}
