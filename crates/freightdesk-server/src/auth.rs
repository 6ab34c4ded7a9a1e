//! Static API token authentication
//!
//! Each route carries its own token. A request is accepted when it presents
//! the token either as `X-API-Key: <token>` or `Authorization: Bearer <token>`.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::{self, Next},
    response::Response,
    Router,
};

use crate::error::ApiError;
use crate::AppState;

const API_KEY_HEADER: &str = "x-api-key";

/// Token expected by one route
#[derive(Clone)]
pub struct RouteToken {
    route: &'static str,
    expected: Option<Arc<str>>,
}

impl RouteToken {
    pub fn new(route: &'static str, expected: Option<&str>) -> Self {
        Self {
            route,
            expected: expected.filter(|t| !t.is_empty()).map(Arc::from),
        }
    }
}

/// Token presented by the caller. `X-API-Key` wins over `Authorization`.
fn presented_token(headers: &HeaderMap) -> Option<&str> {
    if let Some(key) = headers.get(API_KEY_HEADER).and_then(|h| h.to_str().ok()) {
        return Some(key.trim());
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
}

/// Authentication middleware
pub async fn require_api_token(
    State(token): State<RouteToken>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(expected) = token.expected.as_deref() else {
        return Ok(next.run(request).await);
    };

    match presented_token(request.headers()) {
        Some(presented) if presented == expected => Ok(next.run(request).await),
        Some(_) => {
            tracing::warn!("Invalid API token for {}", token.route);
            Err(ApiError::Unauthorized("Invalid API token".to_string()))
        }
        None => {
            tracing::warn!("Missing API token for {}", token.route);
            Err(ApiError::Unauthorized("Missing API token".to_string()))
        }
    }
}

/// Guard every route of `router` with `token`
pub fn protect(
    router: Router<AppState>,
    route: &'static str,
    token: Option<&str>,
) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(
        RouteToken::new(route, token),
        require_api_token,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_presented_token_sources() {
        let mut headers = HeaderMap::new();
        assert_eq!(presented_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer s3cret"));
        assert_eq!(presented_token(&headers), Some("s3cret"));

        headers.insert(API_KEY_HEADER, HeaderValue::from_static("other"));
        assert_eq!(presented_token(&headers), Some("other"));
    }

    #[test]
    fn test_basic_scheme_is_not_a_token() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
        assert_eq!(presented_token(&headers), None);
    }

    #[test]
    fn test_empty_token_leaves_route_open() {
        assert!(RouteToken::new("health", Some("")).expected.is_none());
        assert!(RouteToken::new("health", None).expected.is_none());
    }
}
