//! Input validation rules for registration and credential forms.
//!
//! These are the rules the platform's forms enforce, collected in one
//! place so `create` can apply them server-side and embedding UIs can
//! reuse them field by field. Checks run in field order and stop at the
//! first failure.

use thiserror::Error;

use crate::domain::server::NewServer;

/// A single failed field check.
///
/// `field` carries the wire name of the offending field so callers can
/// attach the message to the right input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Wire name of the field that failed.
    pub field: &'static str,
    /// Human-readable reason, phrased for direct display.
    pub message: &'static str,
}

impl ValidationError {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Validate a server registration request.
pub fn validate_registration(new_server: &NewServer) -> Result<(), ValidationError> {
    let name_len = new_server.name.chars().count();
    if name_len < 2 {
        return Err(ValidationError::new(
            "name",
            "Name must be at least 2 characters",
        ));
    }
    if name_len > 50 {
        return Err(ValidationError::new(
            "name",
            "Name must be less than 50 characters",
        ));
    }

    let description_len = new_server.description.chars().count();
    if description_len < 10 {
        return Err(ValidationError::new(
            "description",
            "Description must be at least 10 characters",
        ));
    }
    if description_len > 500 {
        return Err(ValidationError::new(
            "description",
            "Description must be less than 500 characters",
        ));
    }

    if !is_url(&new_server.endpoint) {
        return Err(ValidationError::new("endpoint", "Must be a valid URL"));
    }
    if let Some(url) = &new_server.github_url
        && !url.is_empty()
        && !is_url(url)
    {
        return Err(ValidationError::new("githubUrl", "Must be a valid URL"));
    }
    if let Some(url) = &new_server.docs_url
        && !url.is_empty()
        && !is_url(url)
    {
        return Err(ValidationError::new("docsUrl", "Must be a valid URL"));
    }

    Ok(())
}

/// Validate login form fields.
///
/// These are the form-level rules; the auth service itself only rejects
/// empty fields.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::new("email", "Email is required"));
    }
    if !is_email(email) {
        return Err(ValidationError::new("email", "Invalid email address"));
    }
    if password.is_empty() {
        return Err(ValidationError::new("password", "Password is required"));
    }
    if password.chars().count() < 6 {
        return Err(ValidationError::new(
            "password",
            "Password must be at least 6 characters",
        ));
    }
    Ok(())
}

/// Validate signup form fields.
pub fn validate_signup(username: &str, email: &str, password: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::new("username", "Username is required"));
    }
    let username_len = username.chars().count();
    if username_len < 2 {
        return Err(ValidationError::new(
            "username",
            "Username must be at least 2 characters",
        ));
    }
    if username_len > 20 {
        return Err(ValidationError::new(
            "username",
            "Username must be less than 20 characters",
        ));
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::new(
            "username",
            "Username can only contain letters, numbers, and underscores",
        ));
    }
    validate_login(email, password)
}

/// A minimal email shape check: `local@domain` with a dot inside the
/// domain.
fn is_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain
                    .split_once('.')
                    .is_some_and(|(host, rest)| !host.is_empty() && !rest.is_empty())
        }
        None => false,
    }
}

/// A minimal URL shape check: non-empty scheme, `://`, non-empty rest.
fn is_url(s: &str) -> bool {
    s.split_once("://")
        .is_some_and(|(scheme, rest)| !scheme.is_empty() && !rest.is_empty())
}
