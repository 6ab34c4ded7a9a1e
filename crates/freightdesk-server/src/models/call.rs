//! Call analytics DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use freightdesk::{CallRecord, NewCallRecord};

use super::Required;
use crate::error::ApiError;

/// Store call data request. Every field is required; `null` counts as missing.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StoreCallDataRequest {
    pub transcript: Option<String>,
    pub classification: Option<String>,
    pub sentiment: Option<serde_json::Value>,
    pub extracted_data: Option<serde_json::Value>,
    pub call_timestamp: Option<String>,
    /// Seconds
    pub call_duration: Option<f64>,
    pub caller_number: Option<String>,
}

impl StoreCallDataRequest {
    pub fn validate(self) -> Result<NewCallRecord, ApiError> {
        let mut required = Required::default();
        let fields = (
            required.take("transcript", self.transcript),
            required.take("classification", self.classification),
            required.take("sentiment", self.sentiment),
            required.take("extracted_data", self.extracted_data),
            required.take("call_timestamp", self.call_timestamp),
            required.take("call_duration", self.call_duration),
            required.take("caller_number", self.caller_number),
        );

        match fields {
            (
                Some(transcript),
                Some(classification),
                Some(sentiment),
                Some(extracted_data),
                Some(call_timestamp),
                Some(call_duration),
                Some(caller_number),
            ) => Ok(NewCallRecord {
                transcript,
                classification,
                sentiment,
                extracted_data,
                call_timestamp,
                call_duration,
                caller_number,
            }),
            _ => Err(required.into_error()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyticsSummary {
    pub classification: String,
    pub sentiment_score: serde_json::Value,
    pub duration: f64,
    pub data_points_extracted: usize,
}

/// Store call data response
#[derive(Debug, Serialize, ToSchema)]
pub struct StoreCallDataResponse {
    pub success: bool,
    pub call_id: Uuid,
    pub message: String,
    pub analytics_summary: AnalyticsSummary,
}

impl From<CallRecord> for StoreCallDataResponse {
    fn from(record: CallRecord) -> Self {
        let data_points_extracted = record.data_points_extracted();
        Self {
            success: true,
            call_id: record.call_id,
            message: "Call data stored successfully".to_string(),
            analytics_summary: AnalyticsSummary {
                classification: record.classification,
                sentiment_score: record.sentiment,
                duration: record.call_duration,
                data_points_extracted,
            },
        }
    }
}
