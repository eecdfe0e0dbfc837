//! # Server Error Mapping
//!
//! Converts failures from the scrape pipeline and the proxy path into HTTP
//! responses with a JSON error record.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kohde::ScrapeError;
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
pub enum AppError {
    /// Missing or malformed request input. Never reaches the network.
    Validation(String),
    /// The requested host is outside the proxy allow-list.
    Forbidden(String),
    /// The upstream replied with a non-success status the client should see.
    Upstream { status: u16, message: String },
    /// Failures from the scrape pipeline.
    Scrape(ScrapeError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<ScrapeError> for AppError {
    fn from(err: ScrapeError) -> Self {
        AppError::Scrape(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::Upstream { status, message } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            ),
            AppError::Scrape(err) => {
                error!("ScrapeError: {err:?}");
                match err {
                    ScrapeError::InvalidListingUrl(_) => {
                        (StatusCode::BAD_REQUEST, "Invalid Etuovi URL".to_string())
                    }
                    ScrapeError::UpstreamStatus { status } => (
                        StatusCode::BAD_GATEWAY,
                        format!("Failed to fetch page (upstream status {status})"),
                    ),
                    ScrapeError::Fetch(e) => {
                        (StatusCode::BAD_GATEWAY, format!("Failed to fetch page: {e}"))
                    }
                    ScrapeError::Regex(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Server is not configured correctly.".to_string(),
                    ),
                }
            }
            AppError::Internal(err) => {
                error!("Internal server error: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
