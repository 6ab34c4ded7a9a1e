//! FMCSA QCMobile carrier registry
//!
//! Looks carriers up by docket (MC) number:
//! `GET {base}/carriers/docket-number/{digits}?webKey={key}`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use freightdesk::{CarrierRegistry, DomainError, RegistryCarrier};

use crate::config::RegistryConfig;

/// HTTP implementation of CarrierRegistry
pub struct FmcsaRegistry {
    client: Client,
    base_url: String,
    web_key: String,
}

impl FmcsaRegistry {
    pub fn new(config: &RegistryConfig) -> Result<Self, DomainError> {
        Self::with_timeout(&config.base_url, &config.web_key, config.timeout)
    }

    pub fn with_timeout(
        base_url: &str,
        web_key: &str,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("freightdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                DomainError::ExternalService(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            web_key: web_key.to_string(),
        })
    }
}

/// "MC-123456" / "MC123456" / "123456" -> "123456"
fn docket_digits(mc_number: &str) -> Option<String> {
    let digits: String = mc_number.chars().filter(char::is_ascii_digit).collect();
    (!digits.is_empty()).then_some(digits)
}

#[async_trait]
impl CarrierRegistry for FmcsaRegistry {
    async fn lookup(&self, mc_number: &str) -> Result<RegistryCarrier, DomainError> {
        let docket = docket_digits(mc_number).ok_or_else(|| {
            DomainError::ExternalService(format!("No docket number in {mc_number:?}"))
        })?;

        let url = format!("{}/carriers/docket-number/{}", self.base_url, docket);
        let response = self
            .client
            .get(&url)
            .query(&[("webKey", self.web_key.as_str())])
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("FMCSA request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::ExternalService(format!(
                "FMCSA returned {status}"
            )));
        }

        let payload: QcResponse = response
            .json()
            .await
            .map_err(|e| DomainError::ExternalService(format!("FMCSA parse error: {e}")))?;

        let entry = match payload.content {
            Some(QcContent::Many(entries)) => entries.into_iter().next(),
            Some(QcContent::One(entry)) => Some(entry),
            None => None,
        }
        .ok_or_else(|| {
            DomainError::ExternalService(format!("FMCSA has no record for {mc_number}"))
        })?;

        let carrier = entry.carrier;
        Ok(RegistryCarrier {
            mc_number: mc_number.to_string(),
            legal_name: carrier.legal_name.unwrap_or_default(),
            allowed_to_operate: carrier
                .allowed_to_operate
                .is_some_and(|flag| flag.eq_ignore_ascii_case("Y")),
            operating_status: carrier.status_code,
            safety_rating: carrier.safety_rating,
        })
    }
}

// ============================================
// QCMobile Response Types
// ============================================

#[derive(Deserialize)]
struct QcResponse {
    content: Option<QcContent>,
}

/// Docket lookups return a list; DOT lookups return a single entry
#[derive(Deserialize)]
#[serde(untagged)]
enum QcContent {
    Many(Vec<QcEntry>),
    One(QcEntry),
}

#[derive(Deserialize)]
struct QcEntry {
    carrier: QcCarrier,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QcCarrier {
    legal_name: Option<String>,
    allowed_to_operate: Option<String>,
    status_code: Option<String>,
    safety_rating: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docket_digits() {
        assert_eq!(docket_digits("MC123456").as_deref(), Some("123456"));
        assert_eq!(docket_digits("MC-789012").as_deref(), Some("789012"));
        assert_eq!(docket_digits("345678").as_deref(), Some("345678"));
        assert_eq!(docket_digits("MC"), None);
    }

    #[test]
    fn test_parse_single_entry_content() {
        let payload: QcResponse = serde_json::from_value(serde_json::json!({
            "content": {
                "carrier": {
                    "legalName": "SCHNEIDER NATIONAL CARRIERS INC",
                    "allowedToOperate": "Y",
                    "statusCode": "A"
                }
            }
        }))
        .unwrap();
        assert!(matches!(payload.content, Some(QcContent::One(_))));
    }
}
