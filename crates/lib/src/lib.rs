//! # kohde: Listing Extraction & Caption Engine
//!
//! Core library for turning the raw markup of one Etuovi listing page into a
//! normalized [`ListingRecord`]: canonical high-resolution image URLs, scalar
//! facts (title, price, address, size, year, room count, condition), decoded
//! per-room descriptions, and short marketing captions per room category.
//!
//! The engine never builds a DOM. Every field is pulled out of the raw page
//! text by an independent pattern, so partial markup drift on the source site
//! degrades one field at a time instead of breaking the whole record.

pub mod captions;
pub mod decode;
pub mod errors;
pub mod extract;
pub mod fetch;
pub mod images;
pub mod types;

pub use errors::ScrapeError;
pub use extract::Extractor;
pub use types::{ListingRecord, RoomCaptions, RoomDescriptions};

/// Fetches one listing page and runs the full extraction pipeline over it.
///
/// The URL is validated against the listing-path marker before any network
/// I/O. A failed fetch is terminal for the request; extraction itself cannot
/// fail, every field falls back to its declared default.
pub async fn scrape_listing(
    client: &reqwest::Client,
    extractor: &Extractor,
    url: &str,
) -> Result<ListingRecord, ScrapeError> {
    fetch::validate_listing_url(url)?;
    let html = fetch::fetch_listing_document(client, url).await?;
    Ok(extractor.extract(&html))
}
