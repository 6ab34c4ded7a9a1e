//! In-memory NegotiationRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use freightdesk::{DomainError, NegotiationRecord, NegotiationRepository};

#[derive(Default)]
pub struct InMemoryNegotiationRepository {
    records: RwLock<Vec<NegotiationRecord>>,
}

#[async_trait]
impl NegotiationRepository for InMemoryNegotiationRepository {
    async fn append(&self, record: &NegotiationRecord) -> Result<(), DomainError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.records.read().await.len())
    }
}
