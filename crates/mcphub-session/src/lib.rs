#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod chat;
pub mod toolbox;

// Re-export the session types for convenience
pub use chat::ChatSession;
pub use toolbox::ToolboxStore;

// Silence unused dev-dependency warnings; the runtime and seed catalog
// are only needed by the integration suite
#[cfg(test)]
use mcphub_mock as _;
#[cfg(test)]
use tokio as _;
#[cfg(test)]
use tokio_test as _;
