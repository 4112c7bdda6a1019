//! # Server Endpoint Tests
//!
//! This file contains integration tests for the `promptdoc-server` service
//! endpoints and for the rejection of invalid request bodies.

mod common;

use anyhow::Result;
use common::{completion, TestApp, CHAT_PATH, GEOCODE_PATH};
use httpmock::Method;
use serde_json::{json, Value};

#[tokio::test]
async fn test_root_and_health_check_endpoints() -> Result<()> {
    // Arrange
    let app = TestApp::spawn().await?;

    // --- Test Root Endpoint ---
    let root_response = app
        .client
        .get(app.url("/"))
        .send()
        .await
        .expect("Failed to execute request to /");

    // Assert
    assert!(root_response.status().is_success());
    let body: Value = root_response.json().await?;
    assert_eq!(body, json!({"message": "Hello MTS"}));

    // --- Test Health Check Endpoint ---
    let health_response = app
        .client
        .get(app.url("/health"))
        .send()
        .await
        .expect("Failed to execute request to /health");

    // Assert
    assert!(health_response.status().is_success());
    assert_eq!("OK", health_response.text().await?);

    Ok(())
}

#[tokio::test]
async fn test_malformed_json_is_rejected_before_any_outbound_call() -> Result<()> {
    // Arrange
    let app = TestApp::spawn().await?;
    let ai_mock = app
        .mock_server
        .mock_async(|when, then| {
            when.method(Method::POST).path(CHAT_PATH);
            then.status(200).json_body(completion("<p>unused</p>"));
        })
        .await;
    // This JSON is syntactically invalid (missing closing brace).
    let malformed_body = r#"{"client_text": "Build a bakery ordering app""#;

    // Act
    let response = app
        .client
        .post(app.url("/generate-html-direct/"))
        .header("Content-Type", "application/json")
        .body(malformed_body)
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await?;
    assert!(body["error"].is_string());
    assert_eq!(0, ai_mock.hits_async().await);

    Ok(())
}

#[tokio::test]
async fn test_missing_field_is_rejected() -> Result<()> {
    // Arrange
    let app = TestApp::spawn().await?;
    let ai_mock = app
        .mock_server
        .mock_async(|when, then| {
            when.method(Method::POST).path(CHAT_PATH);
            then.status(200).json_body(completion("<p>unused</p>"));
        })
        .await;

    // Act
    // The earliest revision's field name is not accepted.
    let response = app
        .client
        .post(app.url("/generate-html-direct/"))
        .json(&json!({"proposal_text": "Build a bakery ordering app"}))
        .send()
        .await?;

    // Assert
    assert_eq!(422, response.status().as_u16());
    let body: Value = response.json().await?;
    let error_message = body["error"].as_str().unwrap();
    assert!(error_message.contains("missing field `client_text`"));
    assert_eq!(0, ai_mock.hits_async().await);

    Ok(())
}

#[tokio::test]
async fn test_mistyped_coordinates_are_rejected_without_geocoding() -> Result<()> {
    // Arrange
    let app = TestApp::spawn().await?;
    let geo_mock = app
        .mock_server
        .mock_async(|when, then| {
            when.method(Method::GET).path(GEOCODE_PATH);
            then.status(200)
                .json_body(json!({"display_name": "Dhaka, Bangladesh"}));
        })
        .await;

    // Act
    let response = app
        .client
        .post(app.url("/generate-tourist-info-coordinates/"))
        .json(&json!({"latitude": "north", "longitude": 90.4125}))
        .send()
        .await?;

    // Assert
    assert_eq!(422, response.status().as_u16());
    assert_eq!(0, geo_mock.hits_async().await);

    Ok(())
}

#[tokio::test]
async fn test_missing_content_type_is_rejected() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .client
        .post(app.url("/generate-population-report/"))
        .body(r#"{"client_text": "Population 10000"}"#)
        .send()
        .await?;

    assert_eq!(415, response.status().as_u16());
    let body: Value = response.json().await?;
    assert!(body["error"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_legacy_route_is_not_served_by_default() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .client
        .post(app.url("/generate-population-report-coordinates/"))
        .json(&json!({"latitude": 23.8103, "longitude": 90.4125}))
        .send()
        .await?;

    assert_eq!(404, response.status().as_u16());

    Ok(())
}

#[tokio::test]
async fn test_document_routes_require_trailing_slash() -> Result<()> {
    let app = TestApp::spawn().await?;
    let ai_mock = app
        .mock_server
        .mock_async(|when, then| {
            when.method(Method::POST).path(CHAT_PATH);
            then.status(200).json_body(completion("<p>unused</p>"));
        })
        .await;

    let response = app
        .client
        .post(app.url("/generate-html-direct"))
        .json(&json!({"client_text": "Build a bakery ordering app"}))
        .send()
        .await?;

    assert_eq!(404, response.status().as_u16());
    ai_mock.assert_hits_async(0).await;

    Ok(())
}
