//! Shared Module
//!
//! Error types for every layer and their HTTP mapping.

pub mod errors;

pub use errors::{ApiError, RepositoryError, UseCaseError};
