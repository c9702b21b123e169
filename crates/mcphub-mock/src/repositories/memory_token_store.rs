//! In-memory implementation of the token store.
//!
//! The store keeps its two slots in a map keyed by the same names the
//! platform front end uses for browser storage, so a dump of the map
//! reads like the storage pane of a signed-in session.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use mcphub_core::ports::{TokenStore, TokenStoreError};

/// Storage key for the bearer token slot.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Storage key for the serialized profile slot.
pub const AUTH_USER_KEY: &str = "auth_user";

/// In-memory token store.
#[derive(Default)]
pub struct MemoryTokenStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
    /// Create an empty store with no active session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn save_session(&self, token: &str, profile: &str) -> Result<(), TokenStoreError> {
        let mut slots = self.slots.write().await;
        slots.insert(AUTH_TOKEN_KEY.to_owned(), token.to_owned());
        slots.insert(AUTH_USER_KEY.to_owned(), profile.to_owned());
        Ok(())
    }

    async fn token(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.slots.read().await.get(AUTH_TOKEN_KEY).cloned())
    }

    async fn profile(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.slots.read().await.get(AUTH_USER_KEY).cloned())
    }

    async fn clear(&self) -> Result<(), TokenStoreError> {
        let mut slots = self.slots.write().await;
        slots.remove(AUTH_TOKEN_KEY);
        slots.remove(AUTH_USER_KEY);
        Ok(())
    }
}
