use thiserror::Error;

/// Errors surfaced by the scrape pipeline.
///
/// An extraction miss is deliberately not represented here: a pattern that
/// does not match yields the field's default and is never an error.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Invalid Etuovi URL: {0}")]
    InvalidListingUrl(String),
    #[error("Failed to fetch page: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Upstream responded with status {status}")]
    UpstreamStatus { status: u16 },
    #[error("Invalid pattern in extraction catalog: {0}")]
    Regex(#[from] regex::Error),
}
