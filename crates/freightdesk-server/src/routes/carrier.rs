//! Carrier Routes
//!
//! HTTP handlers that delegate to CarrierService.

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};

use crate::auth;
use crate::config::ApiTokens;
use crate::error::{ApiError, ErrorBody};
use crate::models::{VerifyCarrierRequest, VerifyCarrierResponse};
use crate::AppState;

/// Verify carrier eligibility by MC number
#[utoipa::path(
    post,
    path = "/api/verify-carrier",
    request_body = VerifyCarrierRequest,
    responses(
        (status = 200, description = "Verification result", body = VerifyCarrierResponse),
        (status = 400, description = "Missing mc_number", body = ErrorBody),
        (status = 401, description = "Missing or invalid API token", body = ErrorBody)
    ),
    tag = "Carrier"
)]
pub async fn verify_carrier(
    State(state): State<AppState>,
    payload: Result<Json<VerifyCarrierRequest>, JsonRejection>,
) -> Result<Json<VerifyCarrierResponse>, ApiError> {
    let Json(payload) = payload?;
    let (mc_number, use_external) = payload.validate()?;

    let verification = state
        .carrier_service
        .verify(&mc_number, use_external)
        .await?;

    Ok(Json(verification.into()))
}

pub fn router(tokens: &ApiTokens) -> Router<AppState> {
    auth::protect(
        Router::new().route("/api/verify-carrier", post(verify_carrier)),
        "verify-carrier",
        tokens.verify_carrier.as_deref(),
    )
}
