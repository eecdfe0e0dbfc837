//! # Application State
//!
//! The shared state holds the configuration, one reused HTTP client, and the
//! compiled extraction catalog. Everything here is request-independent; each
//! scrape works entirely on its own fetched document.

use crate::config::AppConfig;
use kohde::Extractor;
use std::{sync::Arc, time::Duration};

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Client for upstream page and image fetches.
    pub http_client: reqwest::Client,
    /// The compiled pattern catalog, built once at startup.
    pub extractor: Arc<Extractor>,
}

/// Builds the shared application state from the configuration.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()?;
    let extractor = Extractor::new()?;

    Ok(AppState {
        config: Arc::new(config),
        http_client,
        extractor: Arc::new(extractor),
    })
}
