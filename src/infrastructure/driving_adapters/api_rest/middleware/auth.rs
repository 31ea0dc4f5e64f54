//! JWT Authentication Middleware
//!
//! Authentication is pass-through: a request without an `Authorization`
//! header continues anonymously. A header that is present must carry a
//! valid HS256 bearer token, otherwise the request is rejected with 401.

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Authenticated caller, placed in request extensions when a valid token
/// was presented
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: String,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// Decode the bearer token in `headers`.
///
/// Returns `Ok(None)` when no `Authorization` header is present.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` if the header is not a bearer token or
/// the token does not validate against `secret`.
pub fn authenticate(headers: &HeaderMap, secret: &str) -> Result<Option<AuthenticatedUser>, ApiError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let token = value
        .to_str()
        .ok()
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(ApiError::Unauthorized)?;

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 60;

    let token_data = decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map_err(|e| {
            tracing::warn!(error = %e, "Rejected bearer token");
            ApiError::Unauthorized
        })?;

    Ok(Some(token_data.claims.into()))
}

/// Middleware that resolves the optional caller identity
pub async fn optional_auth(State(state): State<AppState>, mut request: Request<Body>, next: Next) -> Response {
    match authenticate(request.headers(), &state.config.jwt.secret) {
        Ok(Some(user)) => {
            tracing::debug!(user = %user.id, "Authenticated request");
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Ok(None) => next.run(request).await,
        Err(error) => error.into_response(),
    }
}
