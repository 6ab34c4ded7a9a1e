//! Load DTOs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use freightdesk::{Load, LoadSearchCriteria};

use super::non_blank;

/// Search loads request. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SearchLoadsRequest {
    pub equipment_type: Option<String>,
    pub origin_preference: Option<String>,
    pub destination_preference: Option<String>,
    pub min_rate: Option<f64>,
    pub max_rate: Option<f64>,
    pub max_miles: Option<f64>,
    pub commodity_type: Option<String>,
}

impl From<&SearchLoadsRequest> for LoadSearchCriteria {
    fn from(req: &SearchLoadsRequest) -> Self {
        Self {
            equipment_type: non_blank(&req.equipment_type),
            origin: non_blank(&req.origin_preference),
            destination: non_blank(&req.destination_preference),
            min_rate: req.min_rate,
            max_rate: req.max_rate,
            max_miles: req.max_miles,
            commodity: non_blank(&req.commodity_type),
        }
    }
}

/// Query filters for the load feed
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoadFeedQuery {
    pub equipment_type: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub min_rate: Option<f64>,
    pub max_rate: Option<f64>,
}

impl From<&LoadFeedQuery> for LoadSearchCriteria {
    fn from(query: &LoadFeedQuery) -> Self {
        Self {
            equipment_type: non_blank(&query.equipment_type),
            origin: non_blank(&query.origin),
            destination: non_blank(&query.destination),
            min_rate: query.min_rate,
            max_rate: query.max_rate,
            ..Default::default()
        }
    }
}

/// Load as exposed over the API
#[derive(Debug, Serialize, ToSchema)]
pub struct LoadResponse {
    pub load_id: String,
    pub origin: String,
    pub destination: String,
    pub pickup_datetime: NaiveDateTime,
    pub delivery_datetime: NaiveDateTime,
    pub equipment_type: String,
    pub loadboard_rate: f64,
    pub negotiated_rate: Option<f64>,
    pub notes: String,
    pub weight: u32,
    pub commodity_type: String,
    /// available | negotiated | booked
    pub status: String,
    pub miles: u32,
    pub deadhead_miles: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booked_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_rate: Option<f64>,
}

impl From<Load> for LoadResponse {
    fn from(load: Load) -> Self {
        Self {
            status: load.status.to_string(),
            load_id: load.load_id,
            origin: load.origin,
            destination: load.destination,
            pickup_datetime: load.pickup_datetime,
            delivery_datetime: load.delivery_datetime,
            equipment_type: load.equipment_type,
            loadboard_rate: load.loadboard_rate,
            negotiated_rate: load.negotiated_rate,
            notes: load.notes,
            weight: load.weight,
            commodity_type: load.commodity_type,
            miles: load.miles,
            deadhead_miles: load.deadhead_miles,
            booked_by: load.booked_by,
            final_rate: load.final_rate,
        }
    }
}

/// Search loads response
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchLoadsResponse {
    pub success: bool,
    pub loads: Vec<LoadResponse>,
    pub total_count: usize,
    pub search_criteria: SearchLoadsRequest,
}

/// Load with broker terms for carrier decision-making
#[derive(Debug, Serialize, ToSchema)]
pub struct LoadDetails {
    #[serde(flatten)]
    pub load: LoadResponse,
    pub pickup_window: String,
    pub delivery_window: String,
    pub required_documents: Vec<String>,
    pub special_requirements: String,
    pub fuel_surcharge: String,
    pub detention_policy: String,
    pub tarp_required: bool,
}

impl From<Load> for LoadDetails {
    fn from(load: Load) -> Self {
        let tarp_required = load.requires_tarp();
        let special_requirements = load.notes.clone();
        Self {
            load: load.into(),
            pickup_window: "2 hours".to_string(),
            delivery_window: "4 hours".to_string(),
            required_documents: vec![
                "Bill of Lading".to_string(),
                "Insurance Certificate".to_string(),
            ],
            special_requirements,
            fuel_surcharge: "Included".to_string(),
            detention_policy: "Free time: 2 hours, then $50/hour".to_string(),
            tarp_required,
        }
    }
}

/// Load details response
#[derive(Debug, Serialize, ToSchema)]
pub struct LoadDetailsResponse {
    pub success: bool,
    pub load_details: LoadDetails,
}
