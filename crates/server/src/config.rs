//! # Application Configuration
//!
//! Server settings are layered from programmatic defaults and environment
//! variables (`PORT`, `REQUEST_TIMEOUT_SECS`) via the `config` crate.

use config::{Config as ConfigBuilder, ConfigError, Environment};
use serde::Deserialize;

/// The root server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Timeout for upstream page and image fetches, in seconds. Loaded from
    /// `REQUEST_TIMEOUT_SECS` env var.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_port() -> u16 {
    9090
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Loads the configuration from environment variables over the defaults.
pub fn get_config() -> Result<AppConfig, ConfigError> {
    let settings = ConfigBuilder::builder()
        .add_source(Environment::default())
        .build()?;
    settings.try_deserialize()
}
