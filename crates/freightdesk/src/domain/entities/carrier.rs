//! Carrier - Trucking company identity and verification status

use serde::{Deserialize, Serialize};

/// Contact details used when confirming a booking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
}

/// Carrier - keyed by MC number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Carrier {
    pub mc_number: String,
    /// Legal name
    pub company_name: String,
    /// Operating status ("active", "suspended", ...)
    pub status: String,
    pub insurance_valid: bool,
    pub safety_rating: String,
    /// Locally held verification flag; changed only by reseeding
    pub verified: bool,
    pub contact_info: ContactInfo,
}

impl Carrier {
    /// Only verified carriers may book loads
    pub fn can_book(&self) -> bool {
        self.verified
    }
}
