//! # Reverse Geocoding Tests
//!
//! Exercises `NominatimGeocoder` against a `wiremock` server, covering the
//! success path and every way a lookup collapses into the placeholder.

use promptdoc::providers::geo::{nominatim::NominatimGeocoder, Geocoder};
use promptdoc::types::{Language, LocationName};
use serde_json::json;
use std::sync::Once;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

static INIT: Once = Once::new();

/// Initializes tracing for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt::init();
    });
}

fn geocoder(server: &MockServer) -> NominatimGeocoder {
    NominatimGeocoder::new(format!("{}/reverse", server.uri()), "promptdoc-tests/1.0", 10)
        .expect("client should build")
}

#[tokio::test]
async fn test_reverse_returns_display_name() {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("format", "json"))
        .and(query_param("lat", "23.8103"))
        .and(query_param("lon", "90.4125"))
        .and(query_param("zoom", "10"))
        .and(query_param("addressdetails", "1"))
        .and(header("user-agent", "promptdoc-tests/1.0"))
        .and(header("accept-language", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "place_id": 1,
            "display_name": "Dhaka, Dhaka Division, Bangladesh"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let location = geocoder(&server)
        .reverse(23.8103, 90.4125, Language::English)
        .await;

    assert_eq!(
        location,
        LocationName::Resolved("Dhaka, Dhaka Division, Bangladesh".to_string())
    );
}

#[tokio::test]
async fn test_reverse_non_200_returns_placeholder() {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let location = geocoder(&server)
        .reverse(23.8103, 90.4125, Language::Bengali)
        .await;

    assert_eq!(location, LocationName::Unknown(Language::Bengali));
    assert_eq!(location.as_str(), "অজানা স্থান");
}

#[tokio::test]
async fn test_reverse_missing_display_name_returns_placeholder() {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "Unable to geocode"
        })))
        .mount(&server)
        .await;

    let location = geocoder(&server).reverse(0.0, 0.0, Language::English).await;

    assert_eq!(location.as_str(), "Unknown location");
}

#[tokio::test]
async fn test_reverse_malformed_body_returns_placeholder() {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let location = geocoder(&server).reverse(10.0, 10.0, Language::English).await;

    assert!(!location.is_resolved());
}

#[tokio::test]
async fn test_reverse_unreachable_host_returns_placeholder() {
    setup_tracing();
    // Nothing listens on port 1.
    let geocoder =
        NominatimGeocoder::new("http://127.0.0.1:1/reverse".to_string(), "promptdoc-tests/1.0", 10)
            .unwrap();
    let location = geocoder.reverse(95.0, 200.0, Language::English).await;

    assert_eq!(location, LocationName::Unknown(Language::English));
}
