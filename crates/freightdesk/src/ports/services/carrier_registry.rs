//! Carrier Registry Port
//!
//! Abstract interface for an external carrier registry (FMCSA QCMobile).
//! Lookups are best-effort enrichment: callers treat every error the same
//! way and fall back to the local carrier directory.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Carrier record as reported by the registry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistryCarrier {
    pub mc_number: String,
    pub legal_name: String,
    /// Registry's authority decision; defines `verified` when available
    pub allowed_to_operate: bool,
    pub operating_status: Option<String>,
    pub safety_rating: Option<String>,
}

/// Service interface for carrier registry lookups
#[async_trait]
pub trait CarrierRegistry: Send + Sync {
    /// Look up a carrier by MC number. Any failure is reported as
    /// [`DomainError::ExternalService`].
    async fn lookup(&self, mc_number: &str) -> Result<RegistryCarrier, DomainError>;
}
