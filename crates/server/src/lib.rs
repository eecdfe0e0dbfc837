//! # kohde-server
//!
//! The HTTP surface over the `kohde` extraction engine: a scrape endpoint
//! that turns one listing URL into a normalized listing record, and an image
//! proxy that relays photo bytes from allow-listed CDN hosts.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod router;
pub mod state;

use crate::config::AppConfig;
use crate::router::create_router;
use crate::state::build_app_state;
use tracing::info;

/// Builds the application and serves it on the given listener.
pub async fn run(listener: tokio::net::TcpListener, config: AppConfig) -> anyhow::Result<()> {
    let app_state = build_app_state(config)?;
    let app = create_router(app_state);

    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
