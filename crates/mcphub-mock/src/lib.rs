#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod seed;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export repository implementations
pub use repositories::{
    MemoryServerRepository, MemoryStatsRepository, MemoryTokenStore, MemoryUserRepository,
};

// Re-export seed functions for convenient access
pub use seed::{seed_activity, seed_servers, seed_users};
