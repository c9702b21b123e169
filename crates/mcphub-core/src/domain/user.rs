//! Platform user domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform role. Serialized capitalized, as the frontend displays it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Developer,
    #[default]
    User,
}

impl UserRole {
    /// Parse a role from its wire string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Admin" => Some(Self::Admin),
            "Developer" => Some(Self::Developer),
            "User" => Some(Self::User),
            _ => None,
        }
    }

    /// Convert role to its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Developer => "Developer",
            Self::User => "User",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account standing. Only mutated through the admin status update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    #[default]
    Active,
    Suspended,
    Pending,
}

impl UserStatus {
    /// Parse a status from its wire string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Active" => Some(Self::Active),
            "Suspended" => Some(Self::Suspended),
            "Pending" => Some(Self::Pending),
            _ => None,
        }
    }

    /// Convert status to its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Suspended => "Suspended",
            Self::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered platform user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Account identifier.
    pub id: String,

    /// Display handle.
    pub username: String,

    /// Contact address, also used for login.
    pub email: String,

    /// Platform role.
    pub role: UserRole,

    /// Number of servers this user has registered.
    pub servers_count: usize,

    /// Last time the account was seen.
    pub last_active: DateTime<Utc>,

    /// Account standing.
    pub status: UserStatus,
}
