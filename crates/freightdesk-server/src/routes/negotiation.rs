//! Negotiation Routes
//!
//! HTTP handlers that delegate to NegotiationService.

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};

use crate::auth;
use crate::config::ApiTokens;
use crate::error::{ApiError, ErrorBody};
use crate::models::{NegotiateRequest, NegotiateResponse};
use crate::AppState;

/// Evaluate a carrier counter-offer for one round
#[utoipa::path(
    post,
    path = "/api/negotiate",
    request_body = NegotiateRequest,
    responses(
        (status = 200, description = "Round outcome", body = NegotiateResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 401, description = "Missing or invalid API token", body = ErrorBody),
        (status = 404, description = "Load not found", body = ErrorBody),
        (status = 409, description = "Load already booked", body = ErrorBody)
    ),
    tag = "Negotiation"
)]
pub async fn negotiate(
    State(state): State<AppState>,
    payload: Result<Json<NegotiateRequest>, JsonRejection>,
) -> Result<Json<NegotiateResponse>, ApiError> {
    let Json(payload) = payload?;
    let input = payload.validate()?;

    let (record, outcome) = state
        .negotiation_service
        .negotiate(
            &input.load_id,
            &input.mc_number,
            input.counter_offer,
            input.negotiation_round,
        )
        .await?;

    Ok(Json(NegotiateResponse::new(&record, &outcome)))
}

pub fn router(tokens: &ApiTokens) -> Router<AppState> {
    auth::protect(
        Router::new().route("/api/negotiate", post(negotiate)),
        "negotiate",
        tokens.negotiate.as_deref(),
    )
}
