//! Negotiation Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, NegotiationRecord};

/// Append-only negotiation log
#[async_trait]
pub trait NegotiationRepository: Send + Sync {
    async fn append(&self, record: &NegotiationRecord) -> Result<(), DomainError>;

    async fn count(&self) -> Result<usize, DomainError>;
}
