//! Freightdesk API Server
//!
//! HTTP façade for an inbound-carrier freight brokerage desk: carrier
//! verification, load search, rate negotiation, booking and call analytics.
//!
//! ## Architecture
//!
//! - `adapters`: in-memory repositories and the FMCSA registry client
//! - `application`: use-case services over the domain ports
//! - `routes` + `models`: axum handlers and their DTOs
//! - `auth`: per-route static token middleware

pub mod adapters;
pub mod application;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod seed;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use freightdesk::CarrierRegistry;

use adapters::{
    InMemoryBookingRepository, InMemoryCallRepository, InMemoryCarrierRepository,
    InMemoryLoadRepository, InMemoryNegotiationRepository, InMemoryStore,
};
use application::{
    BookingService, CallService, CarrierService, LoadLocks, LoadService, NegotiationService,
};
use config::ApiTokens;

/// Type aliases for application services with concrete repository implementations
pub type AppCarrierService = CarrierService<InMemoryCarrierRepository>;
pub type AppLoadService = LoadService<InMemoryLoadRepository>;
pub type AppNegotiationService =
    NegotiationService<InMemoryLoadRepository, InMemoryNegotiationRepository>;
pub type AppBookingService =
    BookingService<InMemoryCarrierRepository, InMemoryLoadRepository, InMemoryBookingRepository>;
pub type AppCallService = CallService<InMemoryCallRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub carrier_service: Arc<AppCarrierService>,
    pub load_service: Arc<AppLoadService>,
    pub negotiation_service: Arc<AppNegotiationService>,
    pub booking_service: Arc<AppBookingService>,
    pub call_service: Arc<AppCallService>,
}

impl AppState {
    /// Wire services over `store`. Negotiation and booking share one set of
    /// per-load locks.
    pub fn new(
        store: &InMemoryStore,
        registry: Option<(Arc<dyn CarrierRegistry>, Duration)>,
    ) -> Self {
        let locks = Arc::new(LoadLocks::default());

        let carrier_service = CarrierService::new(store.carriers.clone());
        let carrier_service = match registry {
            Some((registry, timeout)) => carrier_service.with_registry(registry, timeout),
            None => carrier_service,
        };

        Self {
            carrier_service: Arc::new(carrier_service),
            load_service: Arc::new(LoadService::new(store.loads.clone())),
            negotiation_service: Arc::new(NegotiationService::new(
                store.loads.clone(),
                store.negotiations.clone(),
                locks.clone(),
            )),
            booking_service: Arc::new(BookingService::new(
                store.carriers.clone(),
                store.loads.clone(),
                store.bookings.clone(),
                locks,
            )),
            call_service: Arc::new(CallService::new(store.calls.clone())),
        }
    }
}

/// Full application router: API routes, Swagger UI, CORS and request tracing
pub fn build_router(state: AppState, tokens: &ApiTokens) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(routes::router(tokens))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
