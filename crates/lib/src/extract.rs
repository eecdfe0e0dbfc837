//! # Pattern Field Extractor
//!
//! An ordered catalog of text patterns applied against the raw page markup.
//! Each field is extracted independently with first-match-wins semantics and
//! a declared default, so a miss on one field never blocks another. This
//! keeps the extractor resilient to partial page-structure drift on the
//! source site.

use crate::captions::generate_captions;
use crate::decode::decode_embedded_text;
use crate::errors::ScrapeError;
use crate::images::ImageScanner;
use crate::types::{ListingRecord, RoomDescriptions};
use regex::Regex;
use tracing::debug;

/// Fallback title when the page carries no `<title>` element.
const DEFAULT_TITLE: &str = "Property";

/// The compiled pattern catalog for one listing page.
///
/// Compiled once at startup and shared across requests; extraction itself is
/// read-only and side-effect free.
pub struct Extractor {
    title: Regex,
    price: Regex,
    address: Regex,
    size: Regex,
    year: Regex,
    bedroom_count: Regex,
    condition: Regex,
    main_description: Regex,
    main_description_fallback: Regex,
    image_tag: Regex,
    kitchen: Regex,
    living_room: Regex,
    bedroom: Regex,
    sauna: Regex,
    bathroom: Regex,
    other: Regex,
    images: ImageScanner,
}

impl Extractor {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            title: Regex::new(r"<title>([^<]+)</title>")?,
            price: Regex::new(r"(\d{1,3}(?:\s?\d{3})*)\s*\u{20ac}")?,
            address: Regex::new(r"<h1[^>]*>([^<]+)</h1>")?,
            size: Regex::new(r"(\d+(?:,\d+)?)\s*m\u{b2}")?,
            year: Regex::new(r#""constructionFinishedYear":(\d{4})"#)?,
            bedroom_count: Regex::new(r#""bedroomCount":(\d+)"#)?,
            condition: Regex::new(r#""overallCondition":"([^"]+)""#)?,
            // The marker class on the main description paragraph is a build
            // artifact of the source site and changes when the site ships a
            // new bundle; the JSON fallback below covers that window.
            main_description: Regex::new(r#"<p[^>]*class="[^"]*HOsH9IY[^"]*"[^>]*>([^<]+)<"#)?,
            main_description_fallback: Regex::new(r#""description":"([^"]{100,})""#)?,
            image_tag: Regex::new(r#""imageTag":"([^"]+)""#)?,
            kitchen: Regex::new(r#""kitchenDescription":"([^"]+)""#)?,
            living_room: Regex::new(r#""livingRoomDescription":"([^"]+)""#)?,
            bedroom: Regex::new(r#""bedroomDescription":"([^"]+)""#)?,
            sauna: Regex::new(r#""saunaDescription":"([^"]+)""#)?,
            bathroom: Regex::new(r#""toiletDescription":"([^"]+)""#)?,
            other: Regex::new(r#""otherSpaceDescription":"([^"]+)""#)?,
            images: ImageScanner::new()?,
        })
    }

    /// Applies the whole catalog to one raw document and assembles the
    /// listing record. Total: every field falls back to its default when its
    /// pattern does not match.
    pub fn extract(&self, html: &str) -> ListingRecord {
        let title = first_capture(&self.title, html)
            .map(|t| t.split(" | ").next().unwrap_or(&t).to_string())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let price = first_capture(&self.price, html)
            .map(|grouped| {
                // The site groups thousands with assorted whitespace
                // (including NBSP); normalize every whitespace char to a
                // plain space.
                let grouped: String = grouped
                    .chars()
                    .map(|c| if c.is_whitespace() { ' ' } else { c })
                    .collect();
                format!("{grouped} \u{20ac}")
            })
            .unwrap_or_default();

        let address = first_capture(&self.address, html)
            .map(|a| a.trim().to_string())
            .unwrap_or_default();

        // The size keeps the unit, so the whole match is the value.
        let size = self
            .size
            .find(html)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let year = first_capture(&self.year, html).unwrap_or_default();

        let bedroom_count = first_capture(&self.bedroom_count, html)
            .and_then(|n| n.parse().ok())
            .unwrap_or(0);

        let condition = first_capture(&self.condition, html).unwrap_or_default();

        let main_description = first_capture(&self.main_description, html).unwrap_or_else(|| {
            first_capture(&self.main_description_fallback, html)
                .map(|d| decode_embedded_text(&d))
                .unwrap_or_default()
        });

        let room_descriptions = RoomDescriptions {
            kitchen: first_capture(&self.kitchen, html).map(|d| decode_embedded_text(&d)),
            living_room: first_capture(&self.living_room, html).map(|d| decode_embedded_text(&d)),
            bedroom: first_capture(&self.bedroom, html).map(|d| decode_embedded_text(&d)),
            sauna: first_capture(&self.sauna, html).map(|d| decode_embedded_text(&d)),
            bathroom: first_capture(&self.bathroom, html).map(|d| decode_embedded_text(&d)),
            other: first_capture(&self.other, html).map(|d| decode_embedded_text(&d)),
        };

        let image_tags: Vec<String> = self
            .image_tag
            .captures_iter(html)
            .map(|cap| cap[1].to_string())
            .collect();

        let images = self.images.scan(html);
        let room_captions = generate_captions(&room_descriptions, &price, &size, &year);

        debug!(
            images = images.len(),
            tags = image_tags.len(),
            "Extraction complete for listing '{title}'"
        );

        ListingRecord {
            title,
            price,
            address,
            size,
            year,
            bedroom_count,
            condition,
            main_description,
            room_descriptions,
            room_captions,
            count: images.len(),
            images,
            image_tags,
        }
    }
}

/// First match of the pattern's first capture group, if any.
fn first_capture(re: &Regex, html: &str) -> Option<String> {
    re.captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}
