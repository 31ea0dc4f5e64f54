//! API Versioning Middleware
//!
//! Versions are carried as a URL segment (`/api/v2/camps`). Routes without
//! the segment run as the default version. Every response advertises the
//! supported versions.

use std::collections::HashMap;
use std::str::FromStr;

use axum::{
    body::Body,
    extract::Path,
    http::{header::HeaderName, HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::shared::errors::ApiError;

/// Header listing the versions this API serves
pub static API_SUPPORTED_VERSIONS_HEADER: HeaderName = HeaderName::from_static("api-supported-versions");

/// An API version as `major.minor`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiVersion {
    pub major: u16,
    pub minor: u16,
}

impl ApiVersion {
    pub const V1: Self = Self { major: 1, minor: 0 };
    pub const V2: Self = Self { major: 2, minor: 0 };

    pub const DEFAULT: Self = Self::V1;

    pub const SUPPORTED: [Self; 2] = [Self::V1, Self::V2];

    #[must_use]
    pub fn is_supported(self) -> bool {
        Self::SUPPORTED.contains(&self)
    }

    /// Comma separated list for the response header
    #[must_use]
    pub fn supported_list() -> String {
        Self::SUPPORTED
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for ApiVersion {
    type Err = ApiError;

    /// Accepts `2`, `2.0`, `v2` and `v2.0`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || ApiError::UnsupportedApiVersion(s.to_string());

        let raw = s.strip_prefix(['v', 'V']).unwrap_or(s);
        let (major, minor) = match raw.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (raw, "0"),
        };

        Ok(Self {
            major: major.parse().map_err(|_| unsupported())?,
            minor: minor.parse().map_err(|_| unsupported())?,
        })
    }
}

/// Resolve the `version` path segment of versioned routes.
///
/// Applied as a route layer so that path parameters are available.
pub async fn require_supported_version(
    Path(params): Path<HashMap<String, String>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(raw) = params.get("version") else {
        return next.run(request).await;
    };

    match raw.parse::<ApiVersion>() {
        Ok(version) if version.is_supported() => {
            tracing::debug!(api_version = %version, "Versioned request");
            request.extensions_mut().insert(version);
            next.run(request).await
        }
        _ => {
            tracing::warn!(requested = %raw, "Unsupported API version");
            ApiError::UnsupportedApiVersion(raw.clone()).into_response()
        }
    }
}

/// Set the default version and advertise the supported ones on every
/// response, including error responses.
pub async fn api_versioning(mut request: Request<Body>, next: Next) -> Response {
    request.extensions_mut().insert(ApiVersion::DEFAULT);

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&ApiVersion::supported_list()) {
        response
            .headers_mut()
            .insert(API_SUPPORTED_VERSIONS_HEADER.clone(), value);
    }

    response
}
