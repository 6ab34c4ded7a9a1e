//! Call Analytics Routes

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};

use crate::auth;
use crate::config::ApiTokens;
use crate::error::{ApiError, ErrorBody};
use crate::models::{StoreCallDataRequest, StoreCallDataResponse};
use crate::AppState;

/// Store a post-call analytics record
#[utoipa::path(
    post,
    path = "/api/store-call-data",
    request_body = StoreCallDataRequest,
    responses(
        (status = 200, description = "Call stored", body = StoreCallDataResponse),
        (status = 400, description = "Missing required fields", body = ErrorBody),
        (status = 401, description = "Missing or invalid API token", body = ErrorBody)
    ),
    tag = "Calls"
)]
pub async fn store_call_data(
    State(state): State<AppState>,
    payload: Result<Json<StoreCallDataRequest>, JsonRejection>,
) -> Result<Json<StoreCallDataResponse>, ApiError> {
    let Json(payload) = payload?;
    let input = payload.validate()?;

    let record = state.call_service.record(input).await?;

    Ok(Json(record.into()))
}

pub fn router(tokens: &ApiTokens) -> Router<AppState> {
    auth::protect(
        Router::new().route("/api/store-call-data", post(store_call_data)),
        "store-call-data",
        tokens.store_call_data.as_deref(),
    )
}
