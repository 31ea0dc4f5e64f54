//! Driving Adapters
//!
//! The REST API under `/api` and `/api/v{version}`: routing, request and
//! response models, and request middleware.

pub mod api_rest;
