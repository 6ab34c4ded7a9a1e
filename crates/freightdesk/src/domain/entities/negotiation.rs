//! NegotiationRecord - One rate negotiation attempt

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::services::NegotiationOutcome;

/// Append-only record of a negotiation attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NegotiationRecord {
    pub negotiation_id: Uuid,
    pub load_id: String,
    pub mc_number: String,
    pub original_rate: f64,
    pub counter_offer: f64,
    pub negotiation_round: u32,
    pub accepted: bool,
    /// Rate the broker settled on (offer, counter, or original)
    pub result_rate: f64,
    pub timestamp: DateTime<Utc>,
}

impl NegotiationRecord {
    pub fn new(
        load_id: String,
        mc_number: String,
        original_rate: f64,
        counter_offer: f64,
        negotiation_round: u32,
        outcome: &NegotiationOutcome,
    ) -> Self {
        Self {
            negotiation_id: Uuid::new_v4(),
            load_id,
            mc_number,
            original_rate,
            counter_offer,
            negotiation_round,
            accepted: outcome.accepted,
            result_rate: outcome.final_rate,
            timestamp: Utc::now(),
        }
    }
}
