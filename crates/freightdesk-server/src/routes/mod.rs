//! Freightdesk API Routes
//!
//! - /api/verify-carrier - Carrier eligibility
//! - /api/search-loads, /api/load-details/:load_id, /api/loads - Load catalog
//! - /api/negotiate - Rate negotiation rounds
//! - /api/book-load - Load booking
//! - /api/store-call-data - Call analytics intake
//! - /api/health, /api/stats - Operations

pub mod booking;
pub mod call;
pub mod carrier;
pub mod loads;
pub mod negotiation;
pub mod swagger;
pub mod system;


use axum::Router;

use crate::config::ApiTokens;
use crate::AppState;

/// Every API route, each guarded by its own token
pub fn router(tokens: &ApiTokens) -> Router<AppState> {
    Router::new()
        .merge(carrier::router(tokens))
        .merge(loads::router(tokens))
        .merge(negotiation::router(tokens))
        .merge(booking::router(tokens))
        .merge(call::router(tokens))
        .merge(system::router(tokens))
}
