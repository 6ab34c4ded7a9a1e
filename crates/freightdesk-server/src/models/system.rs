//! Health and statistics DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub endpoints: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub total_carriers: usize,
    pub verified_carriers: usize,
    pub total_loads: usize,
    pub available_loads: usize,
    pub negotiated_loads: usize,
    pub booked_loads: usize,
    pub total_bookings: usize,
    pub total_negotiations: usize,
    pub total_calls_analyzed: usize,
}
