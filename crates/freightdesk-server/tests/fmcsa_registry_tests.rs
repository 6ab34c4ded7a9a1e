//! FMCSA registry client tests
//!
//! Exercise the QCMobile client against a mock server, and the carrier
//! service fallback when the registry misbehaves.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use freightdesk::{CarrierRegistry, DataSource};
use freightdesk_server::adapters::{FmcsaRegistry, InMemoryStore};
use freightdesk_server::application::CarrierService;
use freightdesk_server::seed;

const WEB_KEY: &str = "test-web-key";

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn registry(server: &MockServer, timeout: Duration) -> FmcsaRegistry {
    FmcsaRegistry::with_timeout(&server.uri(), WEB_KEY, timeout).unwrap()
}

fn docket_response(legal_name: &str, allowed: &str) -> serde_json::Value {
    json!({
        "content": [{
            "carrier": {
                "legalName": legal_name,
                "allowedToOperate": allowed,
                "statusCode": "A",
                "safetyRating": "S"
            }
        }]
    })
}

async fn mount_docket(server: &MockServer, docket: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/carriers/docket-number/{docket}")))
        .and(query_param("webKey", WEB_KEY))
        .respond_with(response)
        .mount(server)
        .await;
}

fn carrier_service(
    registry: FmcsaRegistry,
    timeout: Duration,
) -> CarrierService<freightdesk_server::adapters::InMemoryCarrierRepository> {
    let store = InMemoryStore::seeded(seed::demo_carriers(), seed::demo_loads());
    CarrierService::new(store.carriers.clone()).with_registry(Arc::new(registry), timeout)
}

// ============================================================================
// TESTS
// ============================================================================

#[tokio::test]
async fn test_lookup_allowed_carrier() {
    let server = MockServer::start().await;
    mount_docket(
        &server,
        "123456",
        ResponseTemplate::new(200).set_body_json(docket_response("SWIFT TRANSPORTATION CO", "Y")),
    )
    .await;

    let carrier = registry(&server, Duration::from_secs(2))
        .lookup("MC123456")
        .await
        .unwrap();

    assert_eq!(carrier.mc_number, "MC123456");
    assert_eq!(carrier.legal_name, "SWIFT TRANSPORTATION CO");
    assert!(carrier.allowed_to_operate);
    assert_eq!(carrier.operating_status.as_deref(), Some("A"));
    assert_eq!(carrier.safety_rating.as_deref(), Some("S"));
}

#[tokio::test]
async fn test_lookup_not_allowed_carrier() {
    let server = MockServer::start().await;
    mount_docket(
        &server,
        "345678",
        ResponseTemplate::new(200).set_body_json(docket_response("J.B. HUNT TRANSPORT", "N")),
    )
    .await;

    let carrier = registry(&server, Duration::from_secs(2))
        .lookup("MC-345678")
        .await
        .unwrap();

    assert!(!carrier.allowed_to_operate);
}

#[tokio::test]
async fn test_lookup_server_error() {
    let server = MockServer::start().await;
    mount_docket(&server, "123456", ResponseTemplate::new(500)).await;

    let result = registry(&server, Duration::from_secs(2)).lookup("MC123456").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_lookup_empty_content() {
    let server = MockServer::start().await;
    mount_docket(
        &server,
        "999999",
        ResponseTemplate::new(200).set_body_json(json!({"content": []})),
    )
    .await;

    let result = registry(&server, Duration::from_secs(2)).lookup("MC999999").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_registry_overrides_local_data() {
    let server = MockServer::start().await;
    // Locally verified, but the registry no longer allows it to operate
    mount_docket(
        &server,
        "789012",
        ResponseTemplate::new(200)
            .set_body_json(docket_response("SCHNEIDER NATIONAL CARRIERS", "N")),
    )
    .await;

    let timeout = Duration::from_secs(2);
    let service = carrier_service(registry(&server, timeout), timeout);

    let verification = service.verify("MC789012", true).await.unwrap();
    assert_eq!(verification.data_source, DataSource::Fmcsa);
    assert!(!verification.verified);
    assert_eq!(verification.carrier.company_name, "SCHNEIDER NATIONAL CARRIERS");

    // Without use_external the registry is not consulted
    let verification = service.verify("MC789012", false).await.unwrap();
    assert_eq!(verification.data_source, DataSource::Local);
    assert!(verification.verified);
}

#[tokio::test]
async fn test_slow_registry_falls_back_to_local() {
    let server = MockServer::start().await;
    mount_docket(
        &server,
        "123456",
        ResponseTemplate::new(200)
            .set_body_json(docket_response("SWIFT TRANSPORTATION CO", "N"))
            .set_delay(Duration::from_millis(500)),
    )
    .await;

    let timeout = Duration::from_millis(100);
    let service = carrier_service(registry(&server, timeout), timeout);

    let verification = service.verify("MC123456", true).await.unwrap();
    assert_eq!(verification.data_source, DataSource::Local);
    assert!(verification.verified);
    assert_eq!(verification.carrier.company_name, "Swift Transportation");
}

#[tokio::test]
async fn test_failed_registry_falls_back_to_local() {
    let server = MockServer::start().await;
    mount_docket(&server, "345678", ResponseTemplate::new(503)).await;

    let timeout = Duration::from_secs(2);
    let service = carrier_service(registry(&server, timeout), timeout);

    let verification = service.verify("MC345678", true).await.unwrap();
    assert_eq!(verification.data_source, DataSource::Local);
    assert!(!verification.verified);
}
