//! Freightdesk API Models
//!
//! Request/response DTOs for the HTTP façade. Request fields are optional
//! so that missing fields are reported as validation errors listing every
//! absent field, rather than as deserialization failures.

mod booking;
mod call;
mod carrier;
mod load;
mod negotiation;
mod system;

pub use booking::*;
pub use call::*;
pub use carrier::*;
pub use load::*;
pub use negotiation::*;
pub use system::*;

use crate::error::ApiError;

/// Collects the names of absent required fields
#[derive(Default)]
pub(crate) struct Required {
    missing: Vec<&'static str>,
}

impl Required {
    pub fn take<T>(&mut self, name: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.missing.push(name);
        }
        value
    }

    /// Blank strings count as missing
    pub fn text(&mut self, name: &'static str, value: Option<String>) -> Option<String> {
        let value = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        self.take(name, value)
    }

    pub fn into_error(self) -> ApiError {
        ApiError::missing_fields(&self.missing)
    }
}

/// Optional text filters treat blank strings as unset
pub(crate) fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_collects_in_order() {
        let mut required = Required::default();
        assert_eq!(required.text("load_id", Some(" L001 ".to_string())).as_deref(), Some("L001"));
        assert!(required.take::<f64>("counter_offer", None).is_none());
        assert!(required.text("mc_number", Some("   ".to_string())).is_none());
        assert_eq!(
            required.into_error().to_string(),
            "Missing required fields: counter_offer, mc_number"
        );
    }
}
