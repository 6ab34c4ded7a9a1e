//! BookingStatus - Lifecycle of a booking record

use serde::{Deserialize, Serialize};

/// Booking status. Bookings are created confirmed and never change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Confirmed,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Confirmed => write!(f, "confirmed"),
        }
    }
}
