//! Booking DTOs

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use freightdesk::Booking;

use super::Required;
use crate::error::ApiError;

/// Book load request
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookLoadRequest {
    pub load_id: Option<String>,
    pub agreed_rate: Option<f64>,
    pub mc_number: Option<String>,
}

impl BookLoadRequest {
    /// (load_id, agreed_rate, mc_number)
    pub fn validate(self) -> Result<(String, f64, String), ApiError> {
        let mut required = Required::default();
        let load_id = required.text("load_id", self.load_id);
        let agreed_rate = required.take("agreed_rate", self.agreed_rate);
        let mc_number = required.text("mc_number", self.mc_number);

        match (load_id, agreed_rate, mc_number) {
            (Some(load_id), Some(agreed_rate), Some(mc_number)) => {
                Ok((load_id, agreed_rate, mc_number))
            }
            _ => Err(required.into_error()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingCarrierResponse {
    pub company_name: String,
    pub contact_phone: String,
    pub contact_email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingLoadResponse {
    pub origin: String,
    pub destination: String,
    pub pickup_datetime: NaiveDateTime,
    pub delivery_datetime: NaiveDateTime,
    pub equipment_type: String,
}

/// Booking record
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingResponse {
    pub booking_id: Uuid,
    pub load_id: String,
    pub mc_number: String,
    pub agreed_rate: f64,
    pub booking_timestamp: DateTime<Utc>,
    pub status: String,
    pub carrier_info: BookingCarrierResponse,
    pub load_info: BookingLoadResponse,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            booking_id: booking.booking_id,
            load_id: booking.load_id,
            mc_number: booking.mc_number,
            agreed_rate: booking.agreed_rate,
            booking_timestamp: booking.booking_timestamp,
            status: booking.status.to_string(),
            carrier_info: BookingCarrierResponse {
                company_name: booking.carrier_info.company_name,
                contact_phone: booking.carrier_info.contact_phone,
                contact_email: booking.carrier_info.contact_email,
            },
            load_info: BookingLoadResponse {
                origin: booking.load_info.origin,
                destination: booking.load_info.destination,
                pickup_datetime: booking.load_info.pickup_datetime,
                delivery_datetime: booking.load_info.delivery_datetime,
                equipment_type: booking.load_info.equipment_type,
            },
        }
    }
}

/// Book load response
#[derive(Debug, Serialize, ToSchema)]
pub struct BookLoadResponse {
    pub success: bool,
    pub booking_id: Uuid,
    pub booking: BookingResponse,
    pub message: String,
}

impl From<Booking> for BookLoadResponse {
    fn from(booking: Booking) -> Self {
        Self {
            success: true,
            booking_id: booking.booking_id,
            booking: booking.into(),
            message: "Load successfully booked!".to_string(),
        }
    }
}
