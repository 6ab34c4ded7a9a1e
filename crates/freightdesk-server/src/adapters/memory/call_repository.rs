//! In-memory CallRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use freightdesk::{CallRecord, CallRepository, DomainError};

#[derive(Default)]
pub struct InMemoryCallRepository {
    records: RwLock<Vec<CallRecord>>,
}

#[async_trait]
impl CallRepository for InMemoryCallRepository {
    async fn append(&self, record: &CallRecord) -> Result<(), DomainError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.records.read().await.len())
    }
}
