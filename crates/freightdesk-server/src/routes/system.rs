//! Health and Statistics Routes

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;

use crate::auth;
use crate::config::ApiTokens;
use crate::error::{ApiError, ErrorBody};
use crate::models::{HealthResponse, StatsResponse};
use crate::AppState;

/// Endpoints advertised by the health check
pub const ENDPOINTS: [&str; 9] = [
    "/api/verify-carrier",
    "/api/search-loads",
    "/api/load-details/{load_id}",
    "/api/loads",
    "/api/negotiate",
    "/api/book-load",
    "/api/store-call-data",
    "/api/health",
    "/api/stats",
];

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 401, description = "Missing or invalid API token", body = ErrorBody)
    ),
    tag = "Health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

/// Aggregate counts over every collection
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Current statistics", body = StatsResponse),
        (status = 401, description = "Missing or invalid API token", body = ErrorBody)
    ),
    tag = "Health"
)]
pub async fn stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let (total_carriers, verified_carriers) = state.carrier_service.counts().await?;
    let loads = state.load_service.counts().await?;

    Ok(Json(StatsResponse {
        total_carriers,
        verified_carriers,
        total_loads: loads.total,
        available_loads: loads.available,
        negotiated_loads: loads.negotiated,
        booked_loads: loads.booked,
        total_bookings: state.booking_service.count().await?,
        total_negotiations: state.negotiation_service.count().await?,
        total_calls_analyzed: state.call_service.count().await?,
    }))
}

pub fn router(tokens: &ApiTokens) -> Router<AppState> {
    Router::new()
        .merge(auth::protect(
            Router::new().route("/api/health", get(health)),
            "health",
            tokens.health.as_deref(),
        ))
        .merge(auth::protect(
            Router::new().route("/api/stats", get(stats)),
            "stats",
            tokens.stats.as_deref(),
        ))
}
