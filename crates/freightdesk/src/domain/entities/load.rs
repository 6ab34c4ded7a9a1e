//! Load - Shipment posted on the board

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::LoadStatus;

/// Load - a shipment with route, equipment, rate and lifecycle status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Load {
    pub load_id: String,
    pub origin: String,
    pub destination: String,
    pub pickup_datetime: NaiveDateTime,
    pub delivery_datetime: NaiveDateTime,
    pub equipment_type: String,
    /// Originally posted rate
    pub loadboard_rate: f64,
    #[serde(default)]
    pub negotiated_rate: Option<f64>,
    #[serde(default)]
    pub notes: String,
    pub weight: u32,
    pub commodity_type: String,
    #[serde(default)]
    pub status: LoadStatus,
    pub miles: u32,
    #[serde(default)]
    pub deadhead_miles: u32,
    /// MC number of the booking carrier
    #[serde(default)]
    pub booked_by: Option<String>,
    /// Rate agreed at booking time
    #[serde(default)]
    pub final_rate: Option<f64>,
}

impl Load {
    pub fn is_available(&self) -> bool {
        self.status == LoadStatus::Available
    }

    pub fn is_bookable(&self) -> bool {
        self.status.is_bookable()
    }

    pub fn requires_tarp(&self) -> bool {
        self.equipment_type.eq_ignore_ascii_case("flatbed")
    }

    /// Record an accepted negotiated rate
    pub fn accept_negotiated_rate(&mut self, rate: f64) -> Result<(), DomainError> {
        self.transition(LoadStatus::Negotiated)?;
        self.negotiated_rate = Some(rate);
        Ok(())
    }

    /// Mark the load booked by a carrier at the agreed rate
    pub fn mark_booked(&mut self, mc_number: &str, agreed_rate: f64) -> Result<(), DomainError> {
        self.transition(LoadStatus::Booked)?;
        self.booked_by = Some(mc_number.to_string());
        self.final_rate = Some(agreed_rate);
        Ok(())
    }

    fn transition(&mut self, next: LoadStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::Conflict(format!(
                "Load {} cannot move from {} to {}",
                self.load_id, self.status, next
            )));
        }
        self.status = next;
        Ok(())
    }
}
