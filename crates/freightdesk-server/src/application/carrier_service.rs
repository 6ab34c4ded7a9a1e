//! Carrier Application Service
//!
//! Verification against the local directory, optionally overridden by the
//! external registry. Registry failures of any kind fall back to local data.

use std::sync::Arc;
use std::time::Duration;

use freightdesk::{
    Carrier, CarrierRegistry, CarrierRepository, DataSource, DomainError, RegistryCarrier,
};

/// Carrier summary returned by verification
#[derive(Debug, Clone, PartialEq)]
pub struct CarrierProfile {
    pub mc_number: String,
    pub company_name: String,
    pub status: String,
    pub insurance_valid: Option<bool>,
    pub safety_rating: Option<String>,
}

impl From<&Carrier> for CarrierProfile {
    fn from(carrier: &Carrier) -> Self {
        Self {
            mc_number: carrier.mc_number.clone(),
            company_name: carrier.company_name.clone(),
            status: carrier.status.clone(),
            insurance_valid: Some(carrier.insurance_valid),
            safety_rating: Some(carrier.safety_rating.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarrierVerification {
    pub verified: bool,
    pub carrier: CarrierProfile,
    pub data_source: DataSource,
}

pub struct CarrierService<C: CarrierRepository> {
    repo: Arc<C>,
    registry: Option<Arc<dyn CarrierRegistry>>,
    registry_timeout: Duration,
}

impl<C: CarrierRepository> CarrierService<C> {
    pub fn new(repo: Arc<C>) -> Self {
        Self {
            repo,
            registry: None,
            registry_timeout: Duration::from_millis(crate::config::DEFAULT_FMCSA_TIMEOUT_MS),
        }
    }

    /// Attach an external registry, bounded by `timeout` per lookup
    pub fn with_registry(mut self, registry: Arc<dyn CarrierRegistry>, timeout: Duration) -> Self {
        self.registry = Some(registry);
        self.registry_timeout = timeout;
        self
    }

    /// Verify a carrier by MC number
    pub async fn verify(
        &self,
        mc_number: &str,
        use_external: bool,
    ) -> Result<CarrierVerification, DomainError> {
        let local = self.repo.find_by_mc(mc_number).await?;

        if use_external {
            if let Some(remote) = self.lookup_registry(mc_number).await {
                return Ok(merge(remote, local.as_ref()));
            }
        }

        let carrier = local.ok_or_else(|| DomainError::not_found("Carrier", mc_number))?;
        Ok(CarrierVerification {
            verified: carrier.verified,
            carrier: CarrierProfile::from(&carrier),
            data_source: DataSource::Local,
        })
    }

    /// (total, verified)
    pub async fn counts(&self) -> Result<(usize, usize), DomainError> {
        let carriers = self.repo.find_all().await?;
        let verified = carriers.iter().filter(|c| c.verified).count();
        Ok((carriers.len(), verified))
    }

    async fn lookup_registry(&self, mc_number: &str) -> Option<RegistryCarrier> {
        let registry = self.registry.as_ref()?;

        match tokio::time::timeout(self.registry_timeout, registry.lookup(mc_number)).await {
            Ok(Ok(carrier)) => Some(carrier),
            Ok(Err(e)) => {
                tracing::warn!("Registry lookup for {} failed, using local data: {}", mc_number, e);
                None
            }
            Err(_) => {
                tracing::warn!(
                    "Registry lookup for {} timed out after {:?}, using local data",
                    mc_number,
                    self.registry_timeout
                );
                None
            }
        }
    }
}

fn merge(remote: RegistryCarrier, local: Option<&Carrier>) -> CarrierVerification {
    let company_name = if remote.legal_name.is_empty() {
        local
            .map(|c| c.company_name.clone())
            .unwrap_or_else(|| remote.mc_number.clone())
    } else {
        remote.legal_name
    };

    CarrierVerification {
        verified: remote.allowed_to_operate,
        carrier: CarrierProfile {
            mc_number: remote.mc_number,
            company_name,
            status: remote
                .operating_status
                .or_else(|| local.map(|c| c.status.clone()))
                .unwrap_or_else(|| "unknown".to_string()),
            insurance_valid: local.map(|c| c.insurance_valid),
            safety_rating: remote
                .safety_rating
                .or_else(|| local.map(|c| c.safety_rating.clone())),
        },
        data_source: DataSource::Fmcsa,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::demo_store;
    use async_trait::async_trait;

    enum Stub {
        Allowed(bool),
        Down,
        Slow,
    }

    #[async_trait]
    impl CarrierRegistry for Stub {
        async fn lookup(&self, mc_number: &str) -> Result<RegistryCarrier, DomainError> {
            match self {
                Stub::Allowed(allowed) => Ok(RegistryCarrier {
                    mc_number: mc_number.to_string(),
                    legal_name: "REGISTRY LEGAL NAME".to_string(),
                    allowed_to_operate: *allowed,
                    operating_status: Some("A".to_string()),
                    safety_rating: None,
                }),
                Stub::Down => Err(DomainError::ExternalService("503".to_string())),
                Stub::Slow => {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    Err(DomainError::ExternalService("unreachable".to_string()))
                }
            }
        }
    }

    fn service(stub: Option<Stub>) -> CarrierService<crate::adapters::InMemoryCarrierRepository> {
        let service = CarrierService::new(demo_store().carriers);
        match stub {
            Some(stub) => service.with_registry(Arc::new(stub), Duration::from_millis(50)),
            None => service,
        }
    }

    #[tokio::test]
    async fn test_local_verification() {
        let result = service(None).verify("MC123456", false).await.unwrap();
        assert!(result.verified);
        assert_eq!(result.data_source, DataSource::Local);
        assert_eq!(result.carrier.company_name, "Swift Transportation");

        let suspended = service(None).verify("MC345678", false).await.unwrap();
        assert!(!suspended.verified);
    }

    #[tokio::test]
    async fn test_unknown_carrier_not_found() {
        let err = service(None).verify("MC000000", true).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_registry_flag_overrides_local() {
        let result = service(Some(Stub::Allowed(false)))
            .verify("MC123456", true)
            .await
            .unwrap();
        assert!(!result.verified);
        assert_eq!(result.data_source, DataSource::Fmcsa);
        assert_eq!(result.carrier.company_name, "REGISTRY LEGAL NAME");
        assert_eq!(result.carrier.insurance_valid, Some(true));
        assert_eq!(result.carrier.safety_rating.as_deref(), Some("A"));
    }

    #[tokio::test]
    async fn test_registry_skipped_without_flag() {
        let result = service(Some(Stub::Allowed(false)))
            .verify("MC123456", false)
            .await
            .unwrap();
        assert!(result.verified);
        assert_eq!(result.data_source, DataSource::Local);
    }

    #[tokio::test]
    async fn test_registry_failure_falls_back() {
        let result = service(Some(Stub::Down)).verify("MC789012", true).await.unwrap();
        assert!(result.verified);
        assert_eq!(result.data_source, DataSource::Local);
    }

    #[tokio::test]
    async fn test_registry_timeout_falls_back() {
        let started = std::time::Instant::now();
        let result = service(Some(Stub::Slow)).verify("MC345678", true).await.unwrap();
        assert!(started.elapsed() < Duration::from_secs(2));
        assert!(!result.verified);
        assert_eq!(result.data_source, DataSource::Local);
    }

    #[tokio::test]
    async fn test_registry_hit_for_carrier_missing_locally() {
        let result = service(Some(Stub::Allowed(true)))
            .verify("MC555555", true)
            .await
            .unwrap();
        assert!(result.verified);
        assert_eq!(result.carrier.insurance_valid, None);
        assert_eq!(result.carrier.status, "A");
    }

    #[tokio::test]
    async fn test_counts() {
        assert_eq!(service(None).counts().await.unwrap(), (3, 2));
    }
}
