//! Wire-level types for the assembled listing record. Field names serialize
//! in camelCase to match the JSON record the browser client consumes.

use serde::{Deserialize, Serialize};

/// Decoded free-text descriptions for the closed set of room categories.
/// A key is present only when the corresponding pattern matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDescriptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kitchen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub living_room: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedroom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sauna: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathroom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
}

/// One short caption per present room category, plus the listing-level
/// highlight captions. `exterior` is always set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCaptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kitchen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub living_room: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedroom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sauna: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathroom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
    pub exterior: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// The normalized output record for one scraped listing page.
///
/// Constructed once per request from one fetched document, immutable
/// afterwards, never persisted. Every scalar field is always present with
/// either a matched value or its declared default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub title: String,
    pub price: String,
    pub address: String,
    pub size: String,
    pub year: String,
    pub bedroom_count: u32,
    pub condition: String,
    pub main_description: String,
    pub room_descriptions: RoomDescriptions,
    pub room_captions: RoomCaptions,
    /// Canonical image URLs, deduplicated, first-seen order.
    pub images: Vec<String>,
    /// Raw image tags in document order, not deduplicated.
    pub image_tags: Vec<String>,
    /// Always equals `images.len()`; kept on the wire for the client.
    pub count: usize,
}

impl Default for ListingRecord {
    fn default() -> Self {
        Self {
            title: "Property".to_string(),
            price: String::new(),
            address: String::new(),
            size: String::new(),
            year: String::new(),
            bedroom_count: 0,
            condition: String::new(),
            main_description: String::new(),
            room_descriptions: RoomDescriptions::default(),
            room_captions: RoomCaptions::default(),
            images: Vec::new(),
            image_tags: Vec::new(),
            count: 0,
        }
    }
}
