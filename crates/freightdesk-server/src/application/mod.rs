//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod booking_service;
mod call_service;
mod carrier_service;
mod load_locks;
mod load_service;
mod negotiation_service;

pub use booking_service::BookingService;
pub use call_service::CallService;
pub use carrier_service::{CarrierProfile, CarrierService, CarrierVerification};
pub use load_locks::{LoadGuard, LoadLocks};
pub use load_service::{LoadCounts, LoadService};
pub use negotiation_service::NegotiationService;

/// Amounts must be positive, finite numbers
pub(crate) fn validate_amount(field: &str, value: f64) -> Result<(), freightdesk::DomainError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(freightdesk::DomainError::Validation(format!(
            "{field} must be a positive number"
        )))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::adapters::InMemoryStore;
    use crate::seed;

    pub fn demo_store() -> InMemoryStore {
        InMemoryStore::seeded(seed::demo_carriers(), seed::demo_loads())
    }

    pub fn locks() -> Arc<super::LoadLocks> {
        Arc::new(super::LoadLocks::default())
    }
}
