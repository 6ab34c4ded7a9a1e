//! In-memory LoadRepository
//!
//! Loads are kept in a vector so that catalog order is insertion order.

use async_trait::async_trait;
use tokio::sync::RwLock;

use freightdesk::{DomainError, Load, LoadRepository};

#[derive(Default)]
pub struct InMemoryLoadRepository {
    loads: RwLock<Vec<Load>>,
}

impl InMemoryLoadRepository {
    pub fn with_loads(loads: Vec<Load>) -> Self {
        Self {
            loads: RwLock::new(loads),
        }
    }
}

#[async_trait]
impl LoadRepository for InMemoryLoadRepository {
    async fn find_by_id(&self, load_id: &str) -> Result<Option<Load>, DomainError> {
        Ok(self
            .loads
            .read()
            .await
            .iter()
            .find(|l| l.load_id == load_id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Load>, DomainError> {
        Ok(self.loads.read().await.clone())
    }

    async fn save(&self, load: &Load) -> Result<Load, DomainError> {
        let mut loads = self.loads.write().await;
        match loads.iter_mut().find(|l| l.load_id == load.load_id) {
            Some(existing) => *existing = load.clone(),
            None => loads.push(load.clone()),
        }
        Ok(load.clone())
    }
}
