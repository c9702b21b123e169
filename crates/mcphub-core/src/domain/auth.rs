//! Auth session domain types.
//!
//! The platform's auth layer is a stand-in: any non-empty credential pair
//! is accepted and tokens are opaque formatted strings, not real JWTs.
//! The rules for deriving the issued identity live here so the service
//! layer stays a thin shell over the token store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserRole;

/// Fixed account id issued to every login.
pub const LOGIN_USER_ID: &str = "user-1";

/// The profile record issued on login/signup and kept in the token store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    /// Account identifier.
    pub id: String,

    /// Contact address used to sign in.
    pub email: String,

    /// Display handle.
    pub username: String,

    /// Platform role.
    pub role: UserRole,

    /// Avatar image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl AuthUser {
    /// Identity issued for a login with the given email.
    ///
    /// The username is the local part of the email, and any address
    /// containing "admin" is granted the Admin role (everyone else is a
    /// Developer). Placeholder rules, kept deliberately transparent.
    #[must_use]
    pub fn for_login(email: &str) -> Self {
        let role = if email.contains("admin") {
            UserRole::Admin
        } else {
            UserRole::Developer
        };
        Self {
            id: LOGIN_USER_ID.to_string(),
            email: email.to_string(),
            username: local_part(email).to_string(),
            role,
            avatar: None,
        }
    }

    /// Identity issued for a signup. New accounts are always Developers.
    pub fn for_signup(id: impl Into<String>, username: &str, email: &str) -> Self {
        Self {
            id: id.into(),
            email: email.to_string(),
            username: username.to_string(),
            role: UserRole::Developer,
            avatar: None,
        }
    }
}

/// An issued session: the profile plus its opaque token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: AuthUser,
    pub token: String,
}

/// Mint a session token for the given issue time.
#[must_use]
pub fn mint_token(issued_at: DateTime<Utc>) -> String {
    format!("mock-jwt-token-{}", issued_at.timestamp_millis())
}

fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
