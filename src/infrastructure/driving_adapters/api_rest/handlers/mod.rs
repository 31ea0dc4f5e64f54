//! HTTP Handlers
//!
//! One module per resource. Each exposes a `router()` that is nested under
//! both the unversioned and the versioned API prefix.

pub mod camps;
pub mod talks;
