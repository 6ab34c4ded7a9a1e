//! Booking Application Service
//!
//! Preconditions, first failure wins:
//! 1. carrier exists and is verified (else not eligible)
//! 2. load exists and is available or negotiated (else conflict)

use std::sync::Arc;

use freightdesk::{
    Booking, BookingRepository, CarrierRepository, DomainError, LoadRepository,
};

use super::{validate_amount, LoadLocks};

pub struct BookingService<C, L, B>
where
    C: CarrierRepository,
    L: LoadRepository,
    B: BookingRepository,
{
    carriers: Arc<C>,
    loads: Arc<L>,
    bookings: Arc<B>,
    locks: Arc<LoadLocks>,
}

impl<C, L, B> BookingService<C, L, B>
where
    C: CarrierRepository,
    L: LoadRepository,
    B: BookingRepository,
{
    pub fn new(carriers: Arc<C>, loads: Arc<L>, bookings: Arc<B>, locks: Arc<LoadLocks>) -> Self {
        Self {
            carriers,
            loads,
            bookings,
            locks,
        }
    }

    /// Book a load for a carrier at the agreed rate
    pub async fn book(
        &self,
        load_id: &str,
        mc_number: &str,
        agreed_rate: f64,
    ) -> Result<Booking, DomainError> {
        validate_amount("agreed_rate", agreed_rate)?;

        let carrier = self
            .carriers
            .find_by_mc(mc_number)
            .await?
            .filter(|c| c.can_book())
            .ok_or_else(|| {
                tracing::warn!(
                    "Booking of {} refused: carrier {} not eligible",
                    load_id,
                    mc_number
                );
                DomainError::NotEligible("Carrier not verified or not found".to_string())
            })?;

        let _guard = self.locks.acquire(load_id).await;

        let mut load = self
            .loads
            .find_by_id(load_id)
            .await?
            .filter(|l| l.is_bookable())
            .ok_or_else(|| DomainError::Conflict("Load not available for booking".to_string()))?;

        let booking = Booking::confirm(&carrier, &load, agreed_rate);
        load.mark_booked(&carrier.mc_number, agreed_rate)?;
        self.loads.save(&load).await?;
        self.bookings.append(&booking).await?;

        tracing::info!(
            "Booked {} for {} at {} (booking {})",
            load_id,
            mc_number,
            agreed_rate,
            booking.booking_id
        );

        Ok(booking)
    }

    pub async fn count(&self) -> Result<usize, DomainError> {
        self.bookings.count().await
    }
}
