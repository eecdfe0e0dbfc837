//! # Document Fetcher Tests
//!
//! Exercises the upstream retrieval path against a mock HTTP server,
//! covering the success path and the terminal failure modes.

use kohde::fetch::fetch_listing_document;
use kohde::ScrapeError;
use std::sync::Once;
use wiremock::matchers::{headers, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

static INIT: Once = Once::new();

/// Initializes tracing for tests.
fn setup_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt::init();
    });
}

#[tokio::test]
async fn fetch_returns_page_body_on_success() {
    // --- 1. Arrange ---
    setup_tracing();
    let server = MockServer::start().await;
    let html = "<html><head><title>Talo | Etuovi.com</title></head></html>";

    Mock::given(method("GET"))
        .and(path("/kohde/123"))
        .and(headers(
            "Accept-Language",
            vec!["fi-FI", "fi;q=0.9", "en-US;q=0.8", "en;q=0.7"],
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&server)
        .await;

    // --- 2. Act ---
    let client = reqwest::Client::new();
    let result = fetch_listing_document(&client, &format!("{}/kohde/123", server.uri())).await;

    // --- 3. Assert ---
    assert!(result.is_ok(), "fetch failed: {:?}", result.err());
    assert_eq!(result.unwrap(), html);
}

#[tokio::test]
async fn fetch_surfaces_upstream_status_on_failure() {
    // --- 1. Arrange ---
    setup_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/kohde/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    // --- 2. Act ---
    let client = reqwest::Client::new();
    let result = fetch_listing_document(&client, &format!("{}/kohde/missing", server.uri())).await;

    // --- 3. Assert ---
    match result {
        Err(ScrapeError::UpstreamStatus { status }) => assert_eq!(status, 404),
        other => panic!("Expected UpstreamStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_surfaces_transport_errors() {
    setup_tracing();
    // A port nothing listens on.
    let client = reqwest::Client::new();
    let result = fetch_listing_document(&client, "http://127.0.0.1:9/kohde/123").await;
    assert!(matches!(result, Err(ScrapeError::Fetch(_))));
}
