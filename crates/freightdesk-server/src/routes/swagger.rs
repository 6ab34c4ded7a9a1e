//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::models::{
    // Call models
    AnalyticsSummary,
    // Booking models
    BookLoadRequest,
    BookLoadResponse,
    BookingCarrierResponse,
    BookingLoadResponse,
    BookingResponse,
    // Carrier models
    CarrierInfoResponse,
    // System models
    HealthResponse,
    // Load models
    LoadDetails,
    LoadDetailsResponse,
    LoadResponse,
    // Negotiation models
    NegotiateRequest,
    NegotiateResponse,
    SearchLoadsRequest,
    SearchLoadsResponse,
    StatsResponse,
    StoreCallDataRequest,
    StoreCallDataResponse,
    VerifyCarrierRequest,
    VerifyCarrierResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Carrier endpoints
        super::carrier::verify_carrier,
        // Load endpoints
        super::loads::search_loads,
        super::loads::get_load_details,
        super::loads::list_loads,
        // Negotiation endpoints
        super::negotiation::negotiate,
        // Booking endpoints
        super::booking::book_load,
        // Call endpoints
        super::call::store_call_data,
        // Health endpoints
        super::system::health,
        super::system::stats,
    ),
    info(
        title = "Freightdesk API",
        version = "0.1.0",
        description = "Freight brokerage API for inbound carrier calls\n\nCarrier verification, load search, rate negotiation, booking and call analytics.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check and statistics"),
        (name = "Carrier", description = "Carrier eligibility verification"),
        (name = "Loads", description = "Load search and details"),
        (name = "Negotiation", description = "Counter-offer evaluation"),
        (name = "Booking", description = "Load booking"),
        (name = "Calls", description = "Call analytics intake"),
    ),
    components(
        schemas(
            ErrorBody,
            // Carrier
            VerifyCarrierRequest,
            VerifyCarrierResponse,
            CarrierInfoResponse,
            // Loads
            SearchLoadsRequest,
            SearchLoadsResponse,
            LoadResponse,
            LoadDetails,
            LoadDetailsResponse,
            // Negotiation
            NegotiateRequest,
            NegotiateResponse,
            // Booking
            BookLoadRequest,
            BookLoadResponse,
            BookingResponse,
            BookingCarrierResponse,
            BookingLoadResponse,
            // Calls
            StoreCallDataRequest,
            StoreCallDataResponse,
            AnalyticsSummary,
            // Health
            HealthResponse,
            StatsResponse,
        )
    )
)]
pub struct ApiDoc;
