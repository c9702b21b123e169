//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns.
//!
//! # Structure
//!
//! - `server` - Catalog server types (`McpServer`, `NewServer`, `Tool`)
//! - `user` - Platform user types
//! - `auth` - Auth session types and identity rules
//! - `chat` - Simulated conversation and tool-call types
//! - `stats` - Platform statistics snapshot

pub mod auth;
pub mod chat;
pub mod server;
pub mod stats;
pub mod user;

// Re-export server types at the domain level for convenience
pub use server::{
    AuthMethod, McpServer, NewServer, SecurityGrade, ServerCategory, ServerStatus, Tool,
};

// Re-export user types at the domain level for convenience
pub use user::{User, UserRole, UserStatus};

// Re-export auth types at the domain level for convenience
pub use auth::{AuthSession, AuthUser, LOGIN_USER_ID, mint_token};

// Re-export chat types at the domain level for convenience
pub use chat::{ChatMessage, ChatRole, ToolCall, ToolCallStatus};

// Re-export stats types at the domain level for convenience
pub use stats::{ActivityCounters, PlatformStats};
