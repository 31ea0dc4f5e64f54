//! Infrastructure Layer
//!
//! The HTTP surface (driving side) and the storage backends, configuration
//! and database plumbing (driven side).

pub mod driven_adapters;
pub mod driving_adapters;
