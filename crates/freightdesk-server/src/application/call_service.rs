//! Call Analytics Application Service

use std::sync::Arc;

use freightdesk::{CallRecord, CallRepository, DomainError, NewCallRecord};

pub struct CallService<R: CallRepository> {
    repo: Arc<R>,
}

impl<R: CallRepository> CallService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Capture a call record
    pub async fn record(&self, input: NewCallRecord) -> Result<CallRecord, DomainError> {
        let record = CallRecord::new(input);
        self.repo.append(&record).await?;

        tracing::info!(
            "Stored call {} ({}, {} data points)",
            record.call_id,
            record.classification,
            record.data_points_extracted()
        );

        Ok(record)
    }

    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repo.count().await
    }
}
