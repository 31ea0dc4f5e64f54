//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Camp repositories (PostgreSQL and in-memory)
//! - Configuration
//! - Database connection management

pub mod camp_repository;
pub mod config;
pub mod database;

pub use camp_repository::{InMemoryCampRepository, PostgresCampRepository};
pub use config::AppConfig;
