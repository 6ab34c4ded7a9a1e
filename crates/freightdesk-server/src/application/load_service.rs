//! Load Application Service
//!
//! Read-side of the load catalog: search, details, feed.

use std::sync::Arc;

use freightdesk::{
    filter_catalog, search_available, DomainError, Load, LoadRepository, LoadSearchCriteria,
    LoadStatus,
};

/// Load counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadCounts {
    pub total: usize,
    pub available: usize,
    pub negotiated: usize,
    pub booked: usize,
}

pub struct LoadService<L: LoadRepository> {
    repo: Arc<L>,
}

impl<L: LoadRepository> LoadService<L> {
    pub fn new(repo: Arc<L>) -> Self {
        Self { repo }
    }

    /// Available loads matching the criteria, highest rate first
    pub async fn search(&self, criteria: &LoadSearchCriteria) -> Result<Vec<Load>, DomainError> {
        let loads = self.repo.find_all().await?;
        Ok(search_available(loads, criteria))
    }

    /// A single load in any status
    pub async fn get(&self, load_id: &str) -> Result<Load, DomainError> {
        self.repo
            .find_by_id(load_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Load", load_id))
    }

    /// Whole catalog in insertion order, filtered by attributes only
    pub async fn feed(&self, criteria: &LoadSearchCriteria) -> Result<Vec<Load>, DomainError> {
        let loads = self.repo.find_all().await?;
        Ok(filter_catalog(loads, criteria))
    }

    pub async fn counts(&self) -> Result<LoadCounts, DomainError> {
        let loads = self.repo.find_all().await?;
        let mut counts = LoadCounts {
            total: loads.len(),
            ..LoadCounts::default()
        };
        for load in &loads {
            match load.status {
                LoadStatus::Available => counts.available += 1,
                LoadStatus::Negotiated => counts.negotiated += 1,
                LoadStatus::Booked => counts.booked += 1,
            }
        }
        Ok(counts)
    }
}
