//! LoadStatus - Lifecycle of a load on the board

use serde::{Deserialize, Serialize};

/// Load lifecycle status.
///
/// Loads only move forward: `available -> negotiated -> booked`, with
/// `available -> booked` allowed directly. A negotiated load may accept a
/// new rate and stay negotiated. Nothing leaves `booked`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    #[default]
    Available,
    Negotiated,
    Booked,
}

impl LoadStatus {
    /// Whether moving from `self` to `next` respects the forward-only lifecycle
    pub fn can_transition_to(self, next: LoadStatus) -> bool {
        use LoadStatus::*;
        matches!(
            (self, next),
            (Available, Negotiated)
                | (Available, Booked)
                | (Negotiated, Negotiated)
                | (Negotiated, Booked)
        )
    }

    pub fn is_bookable(self) -> bool {
        matches!(self, LoadStatus::Available | LoadStatus::Negotiated)
    }
}

impl std::fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadStatus::Available => write!(f, "available"),
            LoadStatus::Negotiated => write!(f, "negotiated"),
            LoadStatus::Booked => write!(f, "booked"),
        }
    }
}
