//! Negotiation DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use freightdesk::{NegotiationOutcome, NegotiationRecord};

use super::Required;
use crate::error::ApiError;

/// Negotiate request
#[derive(Debug, Deserialize, ToSchema)]
pub struct NegotiateRequest {
    pub load_id: Option<String>,
    pub counter_offer: Option<f64>,
    pub mc_number: Option<String>,
    /// Defaults to 1
    pub negotiation_round: Option<u32>,
}

/// Negotiate request with required fields present
#[derive(Debug)]
pub struct NegotiationInput {
    pub load_id: String,
    pub counter_offer: f64,
    pub mc_number: String,
    pub negotiation_round: u32,
}

impl NegotiateRequest {
    pub fn validate(self) -> Result<NegotiationInput, ApiError> {
        let mut required = Required::default();
        let load_id = required.text("load_id", self.load_id);
        let counter_offer = required.take("counter_offer", self.counter_offer);
        let mc_number = required.text("mc_number", self.mc_number);

        match (load_id, counter_offer, mc_number) {
            (Some(load_id), Some(counter_offer), Some(mc_number)) => Ok(NegotiationInput {
                load_id,
                counter_offer,
                mc_number,
                negotiation_round: self.negotiation_round.unwrap_or(1),
            }),
            _ => Err(required.into_error()),
        }
    }
}

/// Negotiate response
#[derive(Debug, Serialize, ToSchema)]
pub struct NegotiateResponse {
    pub success: bool,
    pub negotiation_id: Uuid,
    pub accepted: bool,
    pub final_rate: f64,
    pub message: String,
    pub negotiation_round: u32,
    pub can_negotiate_again: bool,
}

impl NegotiateResponse {
    pub fn new(record: &NegotiationRecord, outcome: &NegotiationOutcome) -> Self {
        Self {
            success: true,
            negotiation_id: record.negotiation_id,
            accepted: outcome.accepted,
            final_rate: outcome.final_rate,
            message: outcome.message(),
            negotiation_round: outcome.round,
            can_negotiate_again: outcome.can_negotiate_again,
        }
    }
}
