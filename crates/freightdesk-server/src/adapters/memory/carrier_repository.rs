//! In-memory CarrierRepository

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use freightdesk::{Carrier, CarrierRepository, DomainError};

#[derive(Default)]
pub struct InMemoryCarrierRepository {
    carriers: RwLock<HashMap<String, Carrier>>,
}

impl InMemoryCarrierRepository {
    pub fn with_carriers(carriers: Vec<Carrier>) -> Self {
        let carriers = carriers
            .into_iter()
            .map(|c| (c.mc_number.clone(), c))
            .collect();
        Self {
            carriers: RwLock::new(carriers),
        }
    }
}

#[async_trait]
impl CarrierRepository for InMemoryCarrierRepository {
    async fn find_by_mc(&self, mc_number: &str) -> Result<Option<Carrier>, DomainError> {
        Ok(self.carriers.read().await.get(mc_number).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Carrier>, DomainError> {
        let mut carriers: Vec<Carrier> = self.carriers.read().await.values().cloned().collect();
        carriers.sort_by(|a, b| a.mc_number.cmp(&b.mc_number));
        Ok(carriers)
    }
}
