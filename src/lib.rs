//! Code Camp API
//!
//! A Rust-based microservice for managing code camps, their talks and
//! speakers, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
