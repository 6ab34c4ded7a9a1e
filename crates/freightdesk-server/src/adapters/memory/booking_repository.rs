//! In-memory BookingRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use freightdesk::{Booking, BookingRepository, DomainError};

#[derive(Default)]
pub struct InMemoryBookingRepository {
    bookings: RwLock<Vec<Booking>>,
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn append(&self, booking: &Booking) -> Result<(), DomainError> {
        self.bookings.write().await.push(booking.clone());
        Ok(())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.bookings.read().await.len())
    }
}
