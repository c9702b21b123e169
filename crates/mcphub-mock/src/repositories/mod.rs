//! Repository implementations backed by process memory.
//!
//! Rows live behind `tokio::sync::RwLock` guards and are handed out as
//! clones, so callers never observe a partially applied mutation.
//! Nothing is persisted; state lasts as long as the process.

mod memory_server_repository;
mod memory_stats_repository;
mod memory_token_store;
mod memory_user_repository;

pub use memory_server_repository::MemoryServerRepository;
pub use memory_stats_repository::MemoryStatsRepository;
pub use memory_token_store::MemoryTokenStore;
pub use memory_user_repository::MemoryUserRepository;
