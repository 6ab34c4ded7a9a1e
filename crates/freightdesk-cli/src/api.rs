//! Freightdesk API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API Client for Freightdesk
pub struct FreightdeskClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct CarrierInfo {
    pub mc_number: String,
    pub company_name: String,
    pub status: String,
    pub insurance_valid: Option<bool>,
    pub safety_rating: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VerifyResponse {
    pub verified: bool,
    pub carrier_info: CarrierInfo,
    pub data_source: String,
}

#[derive(Debug, Default, Serialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_preference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_preference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_miles: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commodity_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoadSummary {
    pub load_id: String,
    pub origin: String,
    pub destination: String,
    pub pickup_datetime: String,
    pub equipment_type: String,
    pub loadboard_rate: f64,
    pub miles: u32,
    pub commodity_type: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub loads: Vec<LoadSummary>,
    pub total_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct LoadDetails {
    #[serde(flatten)]
    pub load: LoadSummary,
    pub delivery_datetime: String,
    pub weight: u32,
    pub deadhead_miles: u32,
    pub special_requirements: String,
    pub tarp_required: bool,
    pub booked_by: Option<String>,
    pub final_rate: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct LoadDetailsEnvelope {
    load_details: LoadDetails,
}

#[derive(Debug, Serialize)]
struct NegotiateRequest<'a> {
    load_id: &'a str,
    counter_offer: f64,
    mc_number: &'a str,
    negotiation_round: u32,
}

#[derive(Debug, Deserialize)]
pub struct NegotiateResponse {
    pub negotiation_id: Uuid,
    pub accepted: bool,
    pub final_rate: f64,
    pub message: String,
    pub can_negotiate_again: bool,
}

#[derive(Debug, Serialize)]
struct BookRequest<'a> {
    load_id: &'a str,
    agreed_rate: f64,
    mc_number: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct BookResponse {
    pub booking_id: Uuid,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct StatsResponse {
    pub total_carriers: usize,
    pub verified_carriers: usize,
    pub total_loads: usize,
    pub available_loads: usize,
    pub negotiated_loads: usize,
    pub booked_loads: usize,
    pub total_bookings: usize,
    pub total_negotiations: usize,
    pub total_calls_analyzed: usize,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl FreightdeskClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let request = match &self.api_key {
            Some(key) => request.header("X-API-Key", key),
            None => request,
        };

        let resp = request
            .send()
            .await
            .context("Failed to connect to Freightdesk API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            bail!("API error ({}): {}", status, message);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Health check
    pub async fn health(&self) -> Result<HealthResponse> {
        self.send(self.client.get(self.url("/api/health"))).await
    }

    pub async fn stats(&self) -> Result<StatsResponse> {
        self.send(self.client.get(self.url("/api/stats"))).await
    }

    /// Verify a carrier by MC number
    pub async fn verify_carrier(
        &self,
        mc_number: &str,
        use_external: bool,
    ) -> Result<VerifyResponse> {
        let body = serde_json::json!({ "mc_number": mc_number, "use_external": use_external });
        self.send(self.client.post(self.url("/api/verify-carrier")).json(&body))
            .await
    }

    pub async fn search_loads(&self, request: &SearchRequest) -> Result<SearchResponse> {
        self.send(self.client.post(self.url("/api/search-loads")).json(request))
            .await
    }

    pub async fn load_details(&self, load_id: &str) -> Result<LoadDetails> {
        let path = format!("/api/load-details/{}", urlencoding::encode(load_id));
        let envelope: LoadDetailsEnvelope = self.send(self.client.get(self.url(&path))).await?;
        Ok(envelope.load_details)
    }

    pub async fn negotiate(
        &self,
        load_id: &str,
        mc_number: &str,
        counter_offer: f64,
        round: u32,
    ) -> Result<NegotiateResponse> {
        let request = NegotiateRequest {
            load_id,
            counter_offer,
            mc_number,
            negotiation_round: round,
        };
        self.send(self.client.post(self.url("/api/negotiate")).json(&request))
            .await
    }

    pub async fn book_load(
        &self,
        load_id: &str,
        mc_number: &str,
        agreed_rate: f64,
    ) -> Result<BookResponse> {
        let request = BookRequest {
            load_id,
            agreed_rate,
            mc_number,
        };
        self.send(self.client.post(self.url("/api/book-load")).json(&request))
            .await
    }
}
