//! # Document Fetcher
//!
//! Retrieves the raw page body for one validated listing URL. The URL check
//! runs before any network I/O, and a failed fetch is a single terminal
//! failure for the request; there is no retry or partial-result path.

use crate::errors::ScrapeError;
use tracing::info;

/// Path marker that identifies a URL as a listing page.
pub const LISTING_PATH_MARKER: &str = "etuovi.com/kohde/";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "fi-FI,fi;q=0.9,en-US;q=0.8,en;q=0.7";

/// Rejects URLs that do not point at a listing page.
pub fn validate_listing_url(url: &str) -> Result<(), ScrapeError> {
    if url.contains(LISTING_PATH_MARKER) {
        Ok(())
    } else {
        Err(ScrapeError::InvalidListingUrl(url.to_string()))
    }
}

/// Fetches the raw listing markup with a browser-like header set.
///
/// A non-success upstream status surfaces as [`ScrapeError::UpstreamStatus`],
/// a transport error as [`ScrapeError::Fetch`].
pub async fn fetch_listing_document(
    client: &reqwest::Client,
    url: &str,
) -> Result<String, ScrapeError> {
    info!("Fetching listing document from: {url}");
    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .header("Accept", ACCEPT)
        .header("Accept-Language", ACCEPT_LANGUAGE)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ScrapeError::UpstreamStatus {
            status: response.status().as_u16(),
        });
    }

    Ok(response.text().await?)
}
