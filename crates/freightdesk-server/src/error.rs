//! API error type
//!
//! Every failure leaves the server as `{"success": false, "error": "..."}`.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use freightdesk::DomainError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request fields
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    /// Carrier not allowed to perform the operation
    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// `Missing required fields: a, b`
    pub fn missing_fields(fields: &[&str]) -> Self {
        ApiError::Validation(format!("Missing required fields: {}", fields.join(", ")))
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let detail = err.detail();
        match err {
            DomainError::NotFound { .. } => ApiError::NotFound(detail),
            DomainError::Validation(_) => ApiError::Validation(detail),
            DomainError::NotEligible(_) => ApiError::Forbidden(detail),
            DomainError::Conflict(_) => ApiError::Conflict(detail),
            DomainError::Repository(_) | DomainError::ExternalService(_) => {
                ApiError::Internal(detail)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(format!("Invalid query: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = ErrorBody {
            success: false,
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
