//! Booking Routes
//!
//! HTTP handlers that delegate to BookingService.

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};

use crate::auth;
use crate::config::ApiTokens;
use crate::error::{ApiError, ErrorBody};
use crate::models::{BookLoadRequest, BookLoadResponse};
use crate::AppState;

/// Book a load for a verified carrier
#[utoipa::path(
    post,
    path = "/api/book-load",
    request_body = BookLoadRequest,
    responses(
        (status = 200, description = "Load booked", body = BookLoadResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 401, description = "Missing or invalid API token", body = ErrorBody),
        (status = 403, description = "Carrier not verified or not found", body = ErrorBody),
        (status = 409, description = "Load not available for booking", body = ErrorBody)
    ),
    tag = "Booking"
)]
pub async fn book_load(
    State(state): State<AppState>,
    payload: Result<Json<BookLoadRequest>, JsonRejection>,
) -> Result<Json<BookLoadResponse>, ApiError> {
    let Json(payload) = payload?;
    let (load_id, agreed_rate, mc_number) = payload.validate()?;

    let booking = state
        .booking_service
        .book(&load_id, &mc_number, agreed_rate)
        .await?;

    Ok(Json(booking.into()))
}

pub fn router(tokens: &ApiTokens) -> Router<AppState> {
    auth::protect(
        Router::new().route("/api/book-load", post(book_load)),
        "book-load",
        tokens.book_load.as_deref(),
    )
}
