//! Core services - the application's business logic layer.
//!
//! This module contains high-level service abstractions that orchestrate
//! between ports (trait interfaces) and domain logic. Services here are
//! pure orchestrators - they don't know about concrete implementations,
//! and every public call simulates a network round trip first.

mod app_core;
mod auth_service;
mod catalog_service;
mod stats_service;
mod user_service;

pub use app_core::AppCore;
pub use auth_service::AuthService;
pub use catalog_service::CatalogService;
pub use stats_service::StatsService;
pub use user_service::UserService;
