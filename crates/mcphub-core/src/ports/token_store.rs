//! Token store trait definition.
//!
//! This port models the browser-local credential slots the mock auth
//! flow uses: one slot for the bearer token, one for the serialized
//! profile of the signed-in user. Implementations decide where the
//! slots live (memory, a key-value file, real browser storage).

use async_trait::async_trait;

use super::TokenStoreError;

/// Storage for the current session's token and profile.
///
/// The two slots are written together by `save_session` and cleared
/// together by `clear`; a token without a profile (or the reverse)
/// only happens when a caller tampers with the slots directly.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Store the session token and serialized profile, replacing any
    /// previous session.
    async fn save_session(&self, token: &str, profile: &str) -> Result<(), TokenStoreError>;

    /// Read the stored token, if a session exists.
    async fn token(&self) -> Result<Option<String>, TokenStoreError>;

    /// Read the stored serialized profile, if one exists.
    async fn profile(&self) -> Result<Option<String>, TokenStoreError>;

    /// Drop both slots.
    async fn clear(&self) -> Result<(), TokenStoreError>;
}
