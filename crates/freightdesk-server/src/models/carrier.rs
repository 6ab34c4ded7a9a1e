//! Carrier verification DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Required;
use crate::application::{CarrierProfile, CarrierVerification};
use crate::error::ApiError;

/// Verify carrier request
#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyCarrierRequest {
    pub mc_number: Option<String>,
    /// Consult the FMCSA registry before local data
    #[serde(default)]
    pub use_external: bool,
}

impl VerifyCarrierRequest {
    pub fn validate(self) -> Result<(String, bool), ApiError> {
        let mut required = Required::default();
        match required.text("mc_number", self.mc_number) {
            Some(mc_number) => Ok((mc_number, self.use_external)),
            None => Err(required.into_error()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CarrierInfoResponse {
    pub mc_number: String,
    pub company_name: String,
    pub status: String,
    pub insurance_valid: Option<bool>,
    pub safety_rating: Option<String>,
}

impl From<CarrierProfile> for CarrierInfoResponse {
    fn from(profile: CarrierProfile) -> Self {
        Self {
            mc_number: profile.mc_number,
            company_name: profile.company_name,
            status: profile.status,
            insurance_valid: profile.insurance_valid,
            safety_rating: profile.safety_rating,
        }
    }
}

/// Verify carrier response
#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyCarrierResponse {
    pub success: bool,
    pub verified: bool,
    pub carrier_info: CarrierInfoResponse,
    /// "local" or "fmcsa"
    pub data_source: String,
    pub message: String,
}

impl From<CarrierVerification> for VerifyCarrierResponse {
    fn from(verification: CarrierVerification) -> Self {
        Self {
            success: true,
            verified: verification.verified,
            carrier_info: verification.carrier.into(),
            data_source: verification.data_source.to_string(),
            message: "Carrier verification completed".to_string(),
        }
    }
}
