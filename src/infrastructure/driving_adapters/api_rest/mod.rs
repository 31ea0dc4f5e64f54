//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{middleware as axum_middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::{
    CreateCampUseCase, CreateTalkUseCase, DeleteCampUseCase, GetCampUseCase, GetTalkUseCase,
    ListCampsUseCase, ListTalksUseCase, SearchCampsByDateUseCase, UpdateCampUseCase,
};
use crate::domain::gateways::CampRepository;
use crate::infrastructure::driven_adapters::config::AppConfig;

use self::handlers::{camps, talks};
use self::middleware::{api_versioning, optional_auth, request_id_middleware, require_supported_version};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub list_camps_use_case: Arc<ListCampsUseCase>,
    pub get_camp_use_case: Arc<GetCampUseCase>,
    pub search_camps_by_date_use_case: Arc<SearchCampsByDateUseCase>,
    pub create_camp_use_case: Arc<CreateCampUseCase>,
    pub update_camp_use_case: Arc<UpdateCampUseCase>,
    pub delete_camp_use_case: Arc<DeleteCampUseCase>,
    pub list_talks_use_case: Arc<ListTalksUseCase>,
    pub get_talk_use_case: Arc<GetTalkUseCase>,
    pub create_talk_use_case: Arc<CreateTalkUseCase>,
}

impl AppState {
    /// Wire every use case onto one repository
    #[must_use]
    pub fn new(config: AppConfig, camp_repository: Arc<dyn CampRepository>) -> Self {
        Self {
            config: Arc::new(config),
            list_camps_use_case: Arc::new(ListCampsUseCase::new(camp_repository.clone())),
            get_camp_use_case: Arc::new(GetCampUseCase::new(camp_repository.clone())),
            search_camps_by_date_use_case: Arc::new(SearchCampsByDateUseCase::new(camp_repository.clone())),
            create_camp_use_case: Arc::new(CreateCampUseCase::new(camp_repository.clone())),
            update_camp_use_case: Arc::new(UpdateCampUseCase::new(camp_repository.clone())),
            delete_camp_use_case: Arc::new(DeleteCampUseCase::new(camp_repository.clone())),
            list_talks_use_case: Arc::new(ListTalksUseCase::new(camp_repository.clone())),
            get_talk_use_case: Arc::new(GetTalkUseCase::new(camp_repository.clone())),
            create_talk_use_case: Arc::new(CreateTalkUseCase::new(camp_repository)),
        }
    }
}

/// Camp and talk routes, relative to an API prefix
fn api_routes() -> Router<AppState> {
    camps::router().merge(talks::router())
}

/// Build the application router.
///
/// Routes are served both under `/api` (default version) and under
/// `/api/:version`, where the version segment must be supported.
pub fn build_router(state: AppState) -> Router {
    let versioned = api_routes().route_layer(axum_middleware::from_fn(require_supported_version));

    Router::new()
        .nest("/api", api_routes())
        .nest("/api/:version", versioned)
        .layer(axum_middleware::from_fn_with_state(state.clone(), optional_auth))
        .layer(axum_middleware::from_fn(api_versioning))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(axum_middleware::from_fn(request_id_middleware))
        .with_state(state)
}
