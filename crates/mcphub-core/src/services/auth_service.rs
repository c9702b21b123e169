//! Auth service - mock credential flows over the token store.
//!
//! No credential is ever checked against anything. Login succeeds for
//! any non-empty email/password pair and derives the identity from the
//! email itself; signup succeeds unconditionally. What makes the flows
//! worth modeling is the session bookkeeping: token and profile are
//! written together, read back by `me`, and cleared together by
//! `logout`.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::auth::{self, AuthSession, AuthUser};
use crate::latency::Latency;
use crate::ports::{CoreError, TokenStore, TokenStoreError};

/// Service for the mock auth flows.
pub struct AuthService {
    tokens: Arc<dyn TokenStore>,
    latency: Latency,
}

impl AuthService {
    /// Create a new auth service over the given token store.
    pub const fn new(tokens: Arc<dyn TokenStore>, latency: Latency) -> Self {
        Self { tokens, latency }
    }

    /// Sign in with any non-empty credential pair.
    ///
    /// Empty email or password is the one failure mode, reported as the
    /// generic [`CoreError::InvalidCredentials`]. The issued identity
    /// always has id `user-1`; the role is Admin when the email
    /// contains `admin`, Developer otherwise.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, CoreError> {
        self.latency.auth().await;
        if email.is_empty() || password.is_empty() {
            return Err(CoreError::InvalidCredentials);
        }

        let user = AuthUser::for_login(email);
        let token = auth::mint_token(Utc::now());
        self.persist(&user, &token).await?;

        tracing::info!(user_id = %user.id, role = user.role.as_str(), "User signed in");
        Ok(AuthSession { user, token })
    }

    /// Register a new account. Always succeeds; the password is
    /// accepted as-is and never stored.
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        _password: &str,
    ) -> Result<AuthSession, CoreError> {
        self.latency.auth().await;

        let now = Utc::now();
        let id = format!("user-{}", now.timestamp_millis());
        let user = AuthUser::for_signup(id, username, email);
        let token = auth::mint_token(now);
        self.persist(&user, &token).await?;

        tracing::info!(user_id = %user.id, "User signed up");
        Ok(AuthSession { user, token })
    }

    /// The currently signed-in user, if a session exists.
    ///
    /// Absent token means no session; with a token but no stored
    /// profile the answer is also `None`.
    pub async fn me(&self) -> Result<Option<AuthUser>, CoreError> {
        self.latency.session().await;

        if self.tokens.token().await.map_err(CoreError::from)?.is_none() {
            return Ok(None);
        }
        match self.tokens.profile().await.map_err(CoreError::from)? {
            Some(raw) => {
                let user = serde_json::from_str(&raw)
                    .map_err(|e| TokenStoreError::Serialization(e.to_string()))?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// Drop the current session. Idempotent.
    pub async fn logout(&self) -> Result<(), CoreError> {
        self.latency.session().await;
        self.tokens.clear().await.map_err(CoreError::from)?;
        tracing::debug!("Session cleared");
        Ok(())
    }

    /// Write token and serialized profile to the store together.
    async fn persist(&self, user: &AuthUser, token: &str) -> Result<(), CoreError> {
        let profile = serde_json::to_string(user)
            .map_err(|e| TokenStoreError::Serialization(e.to_string()))?;
        self.tokens
            .save_session(token, &profile)
            .await
            .map_err(CoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserRole;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockStore {
        slots: Mutex<(Option<String>, Option<String>)>,
    }

    #[async_trait]
    impl TokenStore for MockStore {
        async fn save_session(&self, token: &str, profile: &str) -> Result<(), TokenStoreError> {
            *self.slots.lock().unwrap() = (Some(token.to_string()), Some(profile.to_string()));
            Ok(())
        }

        async fn token(&self) -> Result<Option<String>, TokenStoreError> {
            Ok(self.slots.lock().unwrap().0.clone())
        }

        async fn profile(&self) -> Result<Option<String>, TokenStoreError> {
            Ok(self.slots.lock().unwrap().1.clone())
        }

        async fn clear(&self) -> Result<(), TokenStoreError> {
            *self.slots.lock().unwrap() = (None, None);
            Ok(())
        }
    }

    fn service() -> AuthService {
        AuthService::new(Arc::new(MockStore::default()), Latency::zero())
    }

    #[tokio::test]
    async fn test_login_rejects_empty_fields() {
        let service = service();

        let err = service.login("", "secret1").await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidCredentials));

        let err = service.login("dev@example.com", "").await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_derives_identity_from_email() {
        let session = service().login("dev@example.com", "anything").await.unwrap();
        assert_eq!(session.user.id, "user-1");
        assert_eq!(session.user.username, "dev");
        assert_eq!(session.user.role, UserRole::Developer);
        assert!(session.token.starts_with("mock-jwt-token-"));
    }

    #[tokio::test]
    async fn test_admin_email_gets_admin_role() {
        let session = service().login("admin@example.com", "pw").await.unwrap();
        assert_eq!(session.user.role, UserRole::Admin);
    }

    #[tokio::test]
    async fn test_me_round_trips_the_profile() {
        let service = service();
        assert!(service.me().await.unwrap().is_none());

        let session = service.login("dev@example.com", "secret1").await.unwrap();
        let me = service.me().await.unwrap().unwrap();
        assert_eq!(me, session.user);
    }

    #[tokio::test]
    async fn test_logout_clears_the_session() {
        let service = service();
        service.login("dev@example.com", "secret1").await.unwrap();
        service.logout().await.unwrap();

        assert!(service.me().await.unwrap().is_none());
        // Logging out twice is fine
        service.logout().await.unwrap();
    }

    #[tokio::test]
    async fn test_signup_always_succeeds_as_developer() {
        let session = service()
            .signup("jane_dev", "jane@admin-corp.com", "pw")
            .await
            .unwrap();
        assert!(session.user.id.starts_with("user-"));
        assert_ne!(session.user.id, "user-1");
        assert_eq!(session.user.role, UserRole::Developer);
        assert_eq!(session.user.username, "jane_dev");
    }
}
