//! CallRecord - Captured call analytics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validated input for a call record
#[derive(Debug, Clone)]
pub struct NewCallRecord {
    pub transcript: String,
    pub classification: String,
    pub sentiment: serde_json::Value,
    pub extracted_data: serde_json::Value,
    pub call_timestamp: String,
    pub call_duration: f64,
    pub caller_number: String,
}

/// Append-only call analytics record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRecord {
    pub call_id: Uuid,
    pub transcript: String,
    pub classification: String,
    pub sentiment: serde_json::Value,
    pub extracted_data: serde_json::Value,
    /// Caller-supplied timestamp, stored as given
    pub call_timestamp: String,
    /// Seconds
    pub call_duration: f64,
    pub caller_number: String,
    pub stored_timestamp: DateTime<Utc>,
    pub processing_status: String,
}

impl CallRecord {
    pub fn new(input: NewCallRecord) -> Self {
        Self {
            call_id: Uuid::new_v4(),
            transcript: input.transcript,
            classification: input.classification,
            sentiment: input.sentiment,
            extracted_data: input.extracted_data,
            call_timestamp: input.call_timestamp,
            call_duration: input.call_duration,
            caller_number: input.caller_number,
            stored_timestamp: Utc::now(),
            processing_status: "completed".to_string(),
        }
    }

    /// Number of extracted data points: array length, otherwise one
    pub fn data_points_extracted(&self) -> usize {
        match &self.extracted_data {
            serde_json::Value::Array(items) => items.len(),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(extracted: serde_json::Value) -> NewCallRecord {
        NewCallRecord {
            transcript: "Carrier asked about L001".to_string(),
            classification: "load_inquiry".to_string(),
            sentiment: json!("positive"),
            extracted_data: extracted,
            call_timestamp: "2025-09-10T10:15:00".to_string(),
            call_duration: 185.0,
            caller_number: "+1-555-0100".to_string(),
        }
    }

    #[test]
    fn test_data_points_for_array() {
        let record = CallRecord::new(input(json!([{"load_id": "L001"}, {"rate": 1450}])));
        assert_eq!(record.data_points_extracted(), 2);
        assert_eq!(record.processing_status, "completed");
    }

    #[test]
    fn test_data_points_for_object() {
        let record = CallRecord::new(input(json!({"load_id": "L001", "rate": 1450})));
        assert_eq!(record.data_points_extracted(), 1);
    }
}
