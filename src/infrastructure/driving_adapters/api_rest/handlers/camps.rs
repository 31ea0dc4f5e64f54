//! Camp Handlers
//!
//! HTTP handlers for the camp resource. Camps are addressed by moniker.
//! Authentication is optional; when a valid token is presented the caller
//! is recorded in the logs of write operations.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    routing::get,
    Extension, Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::dto::camp::{
    CampModel, CampsEnvelope, CreateCampDto, IncludeTalksQuery, SearchCampsQuery, UpdateCampDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::AuthenticatedUser;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Path parameters for single-camp routes
#[derive(Debug, Deserialize)]
pub struct CampPath {
    pub moniker: String,
}

/// Create the router for camp endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/camps", get(list_camps).post(create_camp))
        .route("/camps/search", get(search_camps_by_date))
        .route(
            "/camps/:moniker",
            get(get_camp).put(update_camp).delete(delete_camp),
        )
}

/// Location header value for a camp
#[must_use]
pub fn camp_location(moniker: &str) -> String {
    format!("/api/camps/{moniker}")
}

/// GET /camps - List all camps
///
/// # Responses
///
/// * 200 OK - `{count, items}` envelope, newest event first
#[axum::debug_handler]
async fn list_camps(
    State(state): State<AppState>,
    query: Result<Query<IncludeTalksQuery>, QueryRejection>,
) -> Result<Json<CampsEnvelope>, ApiError> {
    let Query(query) = query?;

    let camps = state.list_camps_use_case.execute(query.include_talks).await?;

    Ok(Json(CampsEnvelope::from(camps)))
}

/// GET /camps/:moniker - Get a camp with its talks
///
/// # Responses
///
/// * 200 OK - Camp found
/// * 404 Not Found - No camp has this moniker
#[axum::debug_handler]
async fn get_camp(
    State(state): State<AppState>,
    Path(path): Path<CampPath>,
) -> Result<Json<CampModel>, ApiError> {
    let camp = state.get_camp_use_case.execute(&path.moniker).await?;

    Ok(Json(CampModel::from(camp)))
}

/// GET /camps/search?theDate=YYYY-MM-DD - Camps held on a date
///
/// # Responses
///
/// * 200 OK - Camps on that date
/// * 400 Bad Request - Missing or malformed date
/// * 404 Not Found - No camp on that date
#[axum::debug_handler]
async fn search_camps_by_date(
    State(state): State<AppState>,
    query: Result<Query<SearchCampsQuery>, QueryRejection>,
) -> Result<Json<Vec<CampModel>>, ApiError> {
    let Query(query) = query?;

    let camps = state
        .search_camps_by_date_use_case
        .execute(query.the_date, query.include_talks)
        .await?;

    Ok(Json(camps.iter().map(CampModel::from).collect()))
}

/// POST /camps - Create a new camp
///
/// # Responses
///
/// * 201 Created - Camp created, `Location` points at it
/// * 400 Bad Request - Validation error, or storage wrote nothing
#[axum::debug_handler]
async fn create_camp(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    body: Result<Json<CreateCampDto>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CampModel>), ApiError> {
    let Json(dto) = body?;
    dto.validate()?;

    if let Some(Extension(user)) = &user {
        tracing::debug!(user = %user.id, "Camp creation requested by authenticated user");
    }

    let data = dto
        .into_create_data()
        .ok_or_else(|| ApiError::BadRequest("Missing required camp fields".to_string()))?;

    let camp = state.create_camp_use_case.execute(data).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, camp_location(camp.moniker()))],
        Json(CampModel::from(camp)),
    ))
}

/// PUT /camps/:moniker - Update the provided fields of a camp
///
/// # Responses
///
/// * 200 OK - Camp updated
/// * 400 Bad Request - Validation error, or storage wrote nothing
/// * 404 Not Found - No camp has this moniker
#[axum::debug_handler]
async fn update_camp(
    State(state): State<AppState>,
    Path(path): Path<CampPath>,
    user: Option<Extension<AuthenticatedUser>>,
    body: Result<Json<UpdateCampDto>, JsonRejection>,
) -> Result<Json<CampModel>, ApiError> {
    let Json(dto) = body?;
    dto.validate()?;

    if let Some(Extension(user)) = &user {
        tracing::debug!(user = %user.id, moniker = %path.moniker, "Camp update requested by authenticated user");
    }

    let camp = state
        .update_camp_use_case
        .execute(&path.moniker, dto.into())
        .await?;

    Ok(Json(CampModel::from(camp)))
}

/// DELETE /camps/:moniker - Delete a camp and its talks
///
/// # Responses
///
/// * 200 OK - Camp deleted, empty body
/// * 400 Bad Request - Storage wrote nothing
/// * 404 Not Found - No camp has this moniker
#[axum::debug_handler]
async fn delete_camp(
    State(state): State<AppState>,
    Path(path): Path<CampPath>,
    user: Option<Extension<AuthenticatedUser>>,
) -> Result<StatusCode, ApiError> {
    if let Some(Extension(user)) = &user {
        tracing::debug!(user = %user.id, moniker = %path.moniker, "Camp deletion requested by authenticated user");
    }

    state.delete_camp_use_case.execute(&path.moniker).await?;

    Ok(StatusCode::OK)
}
