//! # Route Handlers
//!
//! The scrape endpoint runs the extraction pipeline over one fetched listing
//! page; the proxy endpoint relays image bytes from a small allow-listed set
//! of CDN hosts so a browser client blocked from cross-origin image loads can
//! display them.

use crate::errors::AppError;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use kohde::{scrape_listing, ListingRecord, ScrapeError};
use serde::Deserialize;
use tracing::info;
use url::Url;

/// CDN hosts the image proxy may fetch from. Matched by hostname
/// containment, not exact equality.
pub const ALLOWED_IMAGE_HOSTS: [&str; 3] = [
    "d3ls91xgksobn.cloudfront.net",
    "images.etuovi.com",
    "cdn.pixabay.com",
];

const PROXY_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const PROXY_REFERER: &str = "https://www.etuovi.com/";
const PROXY_CACHE_CONTROL: &str = "public, max-age=86400";
const DEFAULT_IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// The handler for the root (`/`) endpoint.
pub async fn root() -> &'static str {
    "kohde server is running."
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}

/// The request body for the `/api/scrape` endpoint.
#[derive(Deserialize)]
pub struct ScrapeRequest {
    pub url: Option<String>,
}

/// The handler for the `/api/scrape` endpoint.
///
/// Validates the listing URL, fetches the page, and returns the assembled
/// listing record. No partial record is ever returned on failure.
pub async fn scrape_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<ScrapeRequest>,
) -> Result<Json<ListingRecord>, AppError> {
    let url = payload.url.as_deref().unwrap_or_default();
    info!("Received scrape request for URL: {url}");

    let record = scrape_listing(&app_state.http_client, &app_state.extractor, url).await?;
    Ok(Json(record))
}

/// The query parameters for the `/api/proxy` endpoint.
#[derive(Deserialize, Default)]
pub struct ProxyParams {
    pub url: Option<String>,
}

/// The handler for the `/api/proxy` endpoint.
///
/// Checks the hostname against the CDN allow-list before fetching, then
/// relays the image bytes with the origin content-type and a 1-day cache
/// directive.
pub async fn proxy_handler(
    State(app_state): State<AppState>,
    Query(params): Query<ProxyParams>,
) -> Result<Response, AppError> {
    let url = params
        .url
        .ok_or_else(|| AppError::Validation("Missing URL parameter".to_string()))?;

    let parsed = Url::parse(&url)
        .map_err(|e| AppError::Validation(format!("Malformed URL: {e}")))?;
    let host = parsed.host_str().unwrap_or_default();
    if !ALLOWED_IMAGE_HOSTS
        .iter()
        .any(|allowed| host.contains(allowed))
    {
        return Err(AppError::Forbidden("Domain not allowed".to_string()));
    }

    info!("Proxying image from: {url}");
    let response = app_state
        .http_client
        .get(parsed)
        .header("User-Agent", PROXY_USER_AGENT)
        .header("Accept", "image/*")
        .header("Referer", PROXY_REFERER)
        .send()
        .await
        .map_err(ScrapeError::Fetch)?;

    if !response.status().is_success() {
        return Err(AppError::Upstream {
            status: response.status().as_u16(),
            message: "Failed to fetch image".to_string(),
        });
    }

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(DEFAULT_IMAGE_CONTENT_TYPE)
        .to_string();
    let bytes = response.bytes().await.map_err(ScrapeError::Fetch)?;

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, PROXY_CACHE_CONTROL.to_string()),
        ],
        bytes,
    )
        .into_response())
}
