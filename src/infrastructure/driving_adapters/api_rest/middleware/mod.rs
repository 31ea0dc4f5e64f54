//! API Middleware
//!
//! Request id tagging, optional authentication and URL segment versioning.

pub mod api_version;
pub mod auth;
pub mod request_id;

pub use api_version::{api_versioning, require_supported_version, ApiVersion};
pub use auth::{optional_auth, AuthenticatedUser};
pub use request_id::{request_id_middleware, RequestId};
