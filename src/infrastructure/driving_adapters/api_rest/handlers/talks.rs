//! Talk Handlers
//!
//! HTTP handlers for talks nested under a camp.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use crate::domain::models::talk::TalkId;
use crate::infrastructure::driving_adapters::api_rest::dto::talk::{CreateTalkDto, TalkModel};
use crate::infrastructure::driving_adapters::api_rest::handlers::camps::CampPath;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Path parameters for single-talk routes
///
/// The id is taken as text so that a non-numeric id resolves to 404
/// instead of a path rejection.
#[derive(Debug, Deserialize)]
pub struct TalkPath {
    pub moniker: String,
    pub id: String,
}

impl TalkPath {
    fn talk_id(&self) -> Result<TalkId, ApiError> {
        self.id
            .parse::<i32>()
            .map(TalkId::new)
            .map_err(|_| ApiError::NotFound(format!("Talk '{}' not found", self.id)))
    }
}

/// Create the router for talk endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/camps/:moniker/talks", get(list_talks).post(create_talk))
        .route("/camps/:moniker/talks/:id", get(get_talk))
}

/// Location header value for a talk
#[must_use]
pub fn talk_location(moniker: &str, talk_id: TalkId) -> String {
    format!("/api/camps/{moniker}/talks/{talk_id}")
}

/// GET /camps/:moniker/talks - List the talks of a camp
///
/// # Responses
///
/// * 200 OK - Talks, possibly empty
/// * 404 Not Found - No camp has this moniker
#[axum::debug_handler]
async fn list_talks(
    State(state): State<AppState>,
    Path(path): Path<CampPath>,
) -> Result<Json<Vec<TalkModel>>, ApiError> {
    let talks = state.list_talks_use_case.execute(&path.moniker).await?;

    Ok(Json(talks.iter().map(TalkModel::from).collect()))
}

/// GET /camps/:moniker/talks/:id - Get one talk of a camp
///
/// # Responses
///
/// * 200 OK - Talk found
/// * 404 Not Found - No such talk in this camp, or the id is not numeric
#[axum::debug_handler]
async fn get_talk(
    State(state): State<AppState>,
    Path(path): Path<TalkPath>,
) -> Result<Json<TalkModel>, ApiError> {
    let talk_id = path.talk_id()?;

    let talk = state.get_talk_use_case.execute(&path.moniker, talk_id).await?;

    Ok(Json(TalkModel::from(talk)))
}

/// POST /camps/:moniker/talks - Create a talk in a camp
///
/// # Responses
///
/// * 201 Created - Talk created, `Location` points at it
/// * 400 Bad Request - Validation error, unknown camp, missing or unknown
///   speaker, or storage wrote nothing
#[axum::debug_handler]
async fn create_talk(
    State(state): State<AppState>,
    Path(path): Path<CampPath>,
    body: Result<Json<CreateTalkDto>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<TalkModel>), ApiError> {
    let Json(dto) = body?;
    dto.validate()?;

    let data = dto
        .into_create_data()
        .ok_or_else(|| ApiError::BadRequest("Missing required talk fields".to_string()))?;

    let talk = state.create_talk_use_case.execute(&path.moniker, data).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, talk_location(talk.camp_moniker(), talk.id()))],
        Json(TalkModel::from(talk)),
    ))
}
