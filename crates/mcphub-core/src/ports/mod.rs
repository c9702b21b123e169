//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from storage.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No storage types in any signature
//! - Traits are minimal and CRUD-focused for repositories
//! - Query logic (filter/sort/page) lives in [`crate::catalog`], not here

pub mod server_repository;
pub mod stats_repository;
pub mod token_store;
pub mod user_repository;

use std::sync::Arc;
use thiserror::Error;

// Re-export port traits for convenience
pub use server_repository::ServerRepository;
pub use stats_repository::StatsRepository;
pub use token_store::TokenStore;
pub use user_repository::UserRepository;

/// Container for all repository trait objects.
///
/// This struct provides a consistent way to wire repositories across adapters
/// without coupling them to concrete implementations. It lives in `mcphub-core`
/// so that `AppCore` can accept it without depending on `mcphub-mock`.
///
/// # Example
///
/// ```ignore
/// // In mcphub-mock factory:
/// pub fn build_repos() -> Repos { ... }
///
/// // In adapter bootstrap:
/// let repos = mcphub_mock::factory::CoreFactory::build_repos();
/// let core = AppCore::new(repos, Latency::default());
/// ```
#[derive(Clone)]
pub struct Repos {
    /// Server repository backing the catalog.
    pub servers: Arc<dyn ServerRepository>,
    /// User repository backing the admin console.
    pub users: Arc<dyn UserRepository>,
    /// Stats repository for activity counters.
    pub stats: Arc<dyn StatsRepository>,
    /// Token store holding the current mock session.
    pub tokens: Arc<dyn TokenStore>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        servers: Arc<dyn ServerRepository>,
        users: Arc<dyn UserRepository>,
        stats: Arc<dyn StatsRepository>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            servers,
            users,
            stats,
            tokens,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details and
/// provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Domain-specific errors for token store operations.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    /// The backing store rejected the read or write.
    #[error("Token storage error: {0}")]
    Storage(String),

    /// The stored profile could not be serialized or deserialized.
    #[error("Profile serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters should map this to their own error types (HTTP status codes,
/// UI toasts, CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Token store operation failed.
    #[error(transparent)]
    TokenStore(#[from] TokenStoreError),

    /// Validation error (invalid input).
    #[error(transparent)]
    Validation(#[from] crate::validation::ValidationError),

    /// Login was attempted with an empty email or password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
