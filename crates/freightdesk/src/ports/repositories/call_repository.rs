//! Call Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, CallRecord};

/// Append-only call analytics log
#[async_trait]
pub trait CallRepository: Send + Sync {
    async fn append(&self, record: &CallRecord) -> Result<(), DomainError>;

    async fn count(&self) -> Result<usize, DomainError>;
}
