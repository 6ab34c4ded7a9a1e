//! Load Routes
//!
//! HTTP handlers that delegate to LoadService.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Json, Router,
};

use freightdesk::LoadSearchCriteria;

use crate::auth;
use crate::config::ApiTokens;
use crate::error::{ApiError, ErrorBody};
use crate::models::{
    LoadDetailsResponse, LoadFeedQuery, LoadResponse, SearchLoadsRequest, SearchLoadsResponse,
};
use crate::AppState;

/// Search available loads, highest rate first
#[utoipa::path(
    post,
    path = "/api/search-loads",
    request_body = SearchLoadsRequest,
    responses(
        (status = 200, description = "Matching available loads", body = SearchLoadsResponse),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 401, description = "Missing or invalid API token", body = ErrorBody)
    ),
    tag = "Loads"
)]
pub async fn search_loads(
    State(state): State<AppState>,
    payload: Result<Json<SearchLoadsRequest>, JsonRejection>,
) -> Result<Json<SearchLoadsResponse>, ApiError> {
    let Json(payload) = payload?;
    let criteria = LoadSearchCriteria::from(&payload);

    let loads = state.load_service.search(&criteria).await?;
    let loads: Vec<LoadResponse> = loads.into_iter().map(Into::into).collect();

    Ok(Json(SearchLoadsResponse {
        success: true,
        total_count: loads.len(),
        loads,
        search_criteria: payload,
    }))
}

/// Get one load with broker terms
#[utoipa::path(
    get,
    path = "/api/load-details/{load_id}",
    params(
        ("load_id" = String, Path, description = "Load identifier")
    ),
    responses(
        (status = 200, description = "Load details", body = LoadDetailsResponse),
        (status = 401, description = "Missing or invalid API token", body = ErrorBody),
        (status = 404, description = "Load not found", body = ErrorBody)
    ),
    tag = "Loads"
)]
pub async fn get_load_details(
    State(state): State<AppState>,
    Path(load_id): Path<String>,
) -> Result<Json<LoadDetailsResponse>, ApiError> {
    let load = state.load_service.get(&load_id).await?;

    Ok(Json(LoadDetailsResponse {
        success: true,
        load_details: load.into(),
    }))
}

/// List the load catalog in any status, in catalog order
#[utoipa::path(
    get,
    path = "/api/loads",
    params(LoadFeedQuery),
    responses(
        (status = 200, description = "Loads matching the filters", body = Vec<LoadResponse>),
        (status = 400, description = "Malformed query", body = ErrorBody),
        (status = 401, description = "Missing or invalid API token", body = ErrorBody)
    ),
    tag = "Loads"
)]
pub async fn list_loads(
    State(state): State<AppState>,
    query: Result<Query<LoadFeedQuery>, QueryRejection>,
) -> Result<Json<Vec<LoadResponse>>, ApiError> {
    let Query(query) = query?;
    let criteria = LoadSearchCriteria::from(&query);

    let loads = state.load_service.feed(&criteria).await?;

    Ok(Json(loads.into_iter().map(Into::into).collect()))
}

pub fn router(tokens: &ApiTokens) -> Router<AppState> {
    Router::new()
        .merge(auth::protect(
            Router::new().route("/api/search-loads", post(search_loads)),
            "search-loads",
            tokens.search_loads.as_deref(),
        ))
        .merge(auth::protect(
            Router::new().route("/api/load-details/:load_id", get(get_load_details)),
            "load-details",
            tokens.load_details.as_deref(),
        ))
        .merge(auth::protect(
            Router::new().route("/api/loads", get(list_loads)),
            "loads",
            tokens.loads.as_deref(),
        ))
}
