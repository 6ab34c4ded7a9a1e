//! Negotiation Policy - Broker response to a carrier's counter-offer
//!
//! Rule, evaluated in order:
//! 1. offer >= 85% of the loadboard rate: accept at the offer
//! 2. round >= 3: reject, settle at the loadboard rate
//! 3. otherwise: counter at 95% of the loadboard rate

use serde::{Deserialize, Serialize};

/// Offers at or above this share of the loadboard rate are accepted
pub const ACCEPT_RATIO: f64 = 0.85;
/// Share of the loadboard rate offered as a counter
pub const COUNTER_RATIO: f64 = 0.95;
/// Rounds at or past this number end the negotiation
pub const FINAL_ROUND: u32 = 3;

/// What the broker decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegotiationDecision {
    Accepted,
    Countered,
    /// Final round reached without an acceptable offer
    Closed,
}

/// Outcome of evaluating one offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationOutcome {
    pub decision: NegotiationDecision,
    pub accepted: bool,
    pub final_rate: f64,
    pub can_negotiate_again: bool,
    pub round: u32,
}

impl NegotiationOutcome {
    pub fn message(&self) -> String {
        match self.decision {
            NegotiationDecision::Accepted => "Rate accepted!".to_string(),
            NegotiationDecision::Closed => {
                "Maximum negotiation rounds reached. Final rate: original rate.".to_string()
            }
            NegotiationDecision::Countered => format!(
                "Counter-offer: ${:?}. Round {} available.",
                self.final_rate,
                self.round.saturating_add(1)
            ),
        }
    }
}

/// Evaluate an offer against a loadboard rate.
///
/// The round is caller-supplied; any round at or past [`FINAL_ROUND`] is
/// terminal regardless of the sequence that led to it. The counter is always
/// 95% of the loadboard rate, even when that is below the offer.
pub fn evaluate_offer(loadboard_rate: f64, offer: f64, round: u32) -> NegotiationOutcome {
    let (decision, final_rate) = if offer >= loadboard_rate * ACCEPT_RATIO {
        (NegotiationDecision::Accepted, offer)
    } else if round >= FINAL_ROUND {
        (NegotiationDecision::Closed, loadboard_rate)
    } else {
        (NegotiationDecision::Countered, loadboard_rate * COUNTER_RATIO)
    };

    let accepted = decision == NegotiationDecision::Accepted;
    NegotiationOutcome {
        decision,
        accepted,
        final_rate,
        can_negotiate_again: !accepted && round < FINAL_ROUND,
        round,
    }
}
