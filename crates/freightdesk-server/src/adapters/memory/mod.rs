//! In-memory repository implementations
//!
//! Each repository owns its collection behind its own lock. Nothing
//! survives a restart.

mod booking_repository;
mod call_repository;
mod carrier_repository;
mod load_repository;
mod negotiation_repository;

use std::sync::Arc;

use freightdesk::{Carrier, Load};

pub use booking_repository::InMemoryBookingRepository;
pub use call_repository::InMemoryCallRepository;
pub use carrier_repository::InMemoryCarrierRepository;
pub use load_repository::InMemoryLoadRepository;
pub use negotiation_repository::InMemoryNegotiationRepository;

/// Owner of every in-memory collection, handed to the application services
#[derive(Clone, Default)]
pub struct InMemoryStore {
    pub carriers: Arc<InMemoryCarrierRepository>,
    pub loads: Arc<InMemoryLoadRepository>,
    pub negotiations: Arc<InMemoryNegotiationRepository>,
    pub bookings: Arc<InMemoryBookingRepository>,
    pub calls: Arc<InMemoryCallRepository>,
}

impl InMemoryStore {
    /// Store pre-populated with carriers and loads (loads keep the given order)
    pub fn seeded(carriers: Vec<Carrier>, loads: Vec<Load>) -> Self {
        Self {
            carriers: Arc::new(InMemoryCarrierRepository::with_carriers(carriers)),
            loads: Arc::new(InMemoryLoadRepository::with_loads(loads)),
            ..Self::default()
        }
    }
}
