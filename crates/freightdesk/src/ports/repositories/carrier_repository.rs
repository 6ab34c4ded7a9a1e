//! Carrier Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Carrier};

/// Repository interface for the carrier directory
#[async_trait]
pub trait CarrierRepository: Send + Sync {
    /// Find a carrier by MC number
    async fn find_by_mc(&self, mc_number: &str) -> Result<Option<Carrier>, DomainError>;

    /// All carriers
    async fn find_all(&self) -> Result<Vec<Carrier>, DomainError>;
}
