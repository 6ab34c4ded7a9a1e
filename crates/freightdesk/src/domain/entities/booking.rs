//! Booking - Confirmed carrier/load assignment

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Carrier, Load};
use crate::domain::value_objects::BookingStatus;

/// Carrier contact copied at booking time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCarrierInfo {
    pub company_name: String,
    pub contact_phone: String,
    pub contact_email: String,
}

/// Load route copied at booking time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingLoadInfo {
    pub origin: String,
    pub destination: String,
    pub pickup_datetime: NaiveDateTime,
    pub delivery_datetime: NaiveDateTime,
    pub equipment_type: String,
}

/// Booking record. Immutable once created; the snapshots do not follow
/// later carrier or load edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: Uuid,
    pub load_id: String,
    pub mc_number: String,
    pub agreed_rate: f64,
    pub booking_timestamp: DateTime<Utc>,
    pub status: BookingStatus,
    pub carrier_info: BookingCarrierInfo,
    pub load_info: BookingLoadInfo,
}

impl Booking {
    /// Create a confirmed booking from the current carrier and load state
    pub fn confirm(carrier: &Carrier, load: &Load, agreed_rate: f64) -> Self {
        Self {
            booking_id: Uuid::new_v4(),
            load_id: load.load_id.clone(),
            mc_number: carrier.mc_number.clone(),
            agreed_rate,
            booking_timestamp: Utc::now(),
            status: BookingStatus::Confirmed,
            carrier_info: BookingCarrierInfo {
                company_name: carrier.company_name.clone(),
                contact_phone: carrier.contact_info.phone.clone(),
                contact_email: carrier.contact_info.email.clone(),
            },
            load_info: BookingLoadInfo {
                origin: load.origin.clone(),
                destination: load.destination.clone(),
                pickup_datetime: load.pickup_datetime,
                delivery_datetime: load.delivery_datetime,
                equipment_type: load.equipment_type.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::load::fixtures;
    use crate::domain::ContactInfo;

    #[test]
    fn test_snapshot_is_detached_from_sources() {
        let mut carrier = Carrier {
            mc_number: "MC123456".to_string(),
            company_name: "Swift Transportation".to_string(),
            status: "active".to_string(),
            insurance_valid: true,
            safety_rating: "A".to_string(),
            verified: true,
            contact_info: ContactInfo {
                phone: "+1-555-0123".to_string(),
                email: "dispatch@swifttrans.com".to_string(),
            },
        };
        let mut load = fixtures::load("L001", 1500.0);

        let booking = Booking::confirm(&carrier, &load, 1450.0);

        carrier.contact_info.phone = "+1-555-9999".to_string();
        load.destination = "Austin, TX".to_string();

        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.carrier_info.contact_phone, "+1-555-0123");
        assert_eq!(booking.load_info.destination, "Houston, TX");
        assert_eq!(booking.agreed_rate, 1450.0);
    }
}
