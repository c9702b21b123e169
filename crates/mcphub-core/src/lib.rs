#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod catalog;
pub mod domain;
pub mod latency;
pub mod ports;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use catalog::{
    DEFAULT_SERVER_PAGE_SIZE, DEFAULT_USER_PAGE_SIZE, Page, PageRequest, ServerFilter, ServerSort,
    UserFilter, paginate, query_servers, query_users,
};
pub use domain::{
    ActivityCounters, AuthMethod, AuthSession, AuthUser, ChatMessage, ChatRole, LOGIN_USER_ID,
    McpServer, NewServer, PlatformStats, SecurityGrade, ServerCategory, ServerStatus, Tool,
    ToolCall, ToolCallStatus, User, UserRole, UserStatus, mint_token,
};
pub use latency::Latency;
pub use ports::{
    CoreError, Repos, RepositoryError, ServerRepository, StatsRepository, TokenStore,
    TokenStoreError, UserRepository,
};
pub use services::{AppCore, AuthService, CatalogService, StatsService, UserService};
pub use validation::{ValidationError, validate_login, validate_registration, validate_signup};

// Silence unused dev-dependency warnings; proptest and tokio-test are
// pulled in by the integration suite
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use proptest as _;
#[cfg(test)]
use tokio_test as _;
