//! Booking Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Booking};

/// Append-only booking store
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn append(&self, booking: &Booking) -> Result<(), DomainError>;

    async fn count(&self) -> Result<usize, DomainError>;
}
