//! Load Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Load};

/// Repository interface for the load catalog.
///
/// Implementations must return loads in insertion order; search ordering
/// relies on it for ties.
#[async_trait]
pub trait LoadRepository: Send + Sync {
    /// Find a load by ID
    async fn find_by_id(&self, load_id: &str) -> Result<Option<Load>, DomainError>;

    /// All loads, in insertion order
    async fn find_all(&self) -> Result<Vec<Load>, DomainError>;

    /// Insert a new load at the end, or replace an existing one in place
    async fn save(&self, load: &Load) -> Result<Load, DomainError>;
}
