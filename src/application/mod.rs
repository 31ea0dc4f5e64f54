//! Application Layer
//!
//! Camp and talk use cases. Each one talks to storage only through the
//! `CampRepository` gateway.

pub mod use_cases;
