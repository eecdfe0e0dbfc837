//! # Caption Generator
//!
//! A small hard-coded rule engine that turns decoded room descriptions into
//! short Finnish marketing captions. Each category owns an ordered list of
//! (keywords, caption) rules; the first rule whose keyword appears in the
//! lower-cased description wins, and every list has a mandatory fallback, so
//! the generator is total and never signals an error.

use crate::types::{RoomCaptions, RoomDescriptions};

/// One entry in a category's decision list.
struct Rule {
    keywords: &'static [&'static str],
    caption: &'static str,
}

const KITCHEN_RULES: &[Rule] = &[
    Rule {
        keywords: &["remontoitu", "uusittu"],
        caption: "Uudistettu keitti\u{f6} \u{2728}",
    },
    Rule {
        keywords: &["tilava", "iso"],
        caption: "Tilava keitti\u{f6} ruokailuun \u{1f37d}\u{fe0f}",
    },
    Rule {
        keywords: &["perinteinen"],
        caption: "Tunnelmallinen keitti\u{f6} \u{1f3e0}",
    },
];
const KITCHEN_FALLBACK: &str = "Kodin syd\u{e4}n \u{1f49b}";

const LIVING_ROOM_RULES: &[Rule] = &[
    Rule {
        keywords: &["takka"],
        caption: "Takkahuone tunnelmaan \u{1f525}",
    },
    Rule {
        keywords: &["tilava", "avara"],
        caption: "Avara olohuone \u{1f6cb}\u{fe0f}",
    },
    Rule {
        keywords: &["valoisa"],
        caption: "Valoisa olohuone \u{2600}\u{fe0f}",
    },
];
const LIVING_ROOM_FALLBACK: &str = "Viihtyis\u{e4} olohuone \u{1f3e1}";

const BEDROOM_RULES: &[Rule] = &[
    Rule {
        keywords: &["s\u{e4}ilytystila", "kaapisto"],
        caption: "Makuuhuone + runsas s\u{e4}ilytystila \u{1f454}",
    },
    Rule {
        keywords: &["tilava", "iso"],
        caption: "Tilava makuuhuone \u{1f6cf}\u{fe0f}",
    },
];
const BEDROOM_FALLBACK: &str = "Rauhallinen makuuhuone \u{1f634}";

const SAUNA_RULES: &[Rule] = &[Rule {
    keywords: &["puukiuas"],
    caption: "Aito puusauna \u{1f9d6}",
}];
const SAUNA_FALLBACK: &str = "Oma sauna rentoutumiseen \u{1f9d6}\u{200d}\u{2642}\u{fe0f}";

const BATHROOM_RULES: &[Rule] = &[Rule {
    keywords: &["remontoitu", "uusittu"],
    caption: "Uudistettu kylpyhuone \u{1f6bf}",
}];
const BATHROOM_FALLBACK: &str = "Toimiva kylpyhuone \u{1f6c1}";

const OTHER_RULES: &[Rule] = &[];
const OTHER_FALLBACK: &str = "Monik\u{e4}ytt\u{f6}ist\u{e4} tilaa \u{1f4e6}";

const EXTERIOR_CAPTION: &str = "Tervetuloa kotiin! \u{1f3e0}";

/// Construction years strictly below this get the historic intro caption.
const HISTORIC_YEAR: i32 = 1960;
/// Construction years strictly above this get the modern intro caption.
const MODERN_YEAR: i32 = 2010;

/// Evaluates a decision list top to bottom against the lower-cased
/// description; falls back to the category default when nothing matches.
fn classify(description: &str, rules: &[Rule], fallback: &'static str) -> String {
    let desc = description.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| desc.contains(kw)))
        .map(|rule| rule.caption.to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// Derives the caption set from the room descriptions and the scalar listing
/// facts. Pure and deterministic; every present room category yields exactly
/// one caption, and `exterior` is always set.
pub fn generate_captions(
    rooms: &RoomDescriptions,
    price: &str,
    size: &str,
    year: &str,
) -> RoomCaptions {
    let mut captions = RoomCaptions {
        exterior: EXTERIOR_CAPTION.to_string(),
        ..RoomCaptions::default()
    };

    captions.kitchen = rooms
        .kitchen
        .as_deref()
        .map(|d| classify(d, KITCHEN_RULES, KITCHEN_FALLBACK));
    captions.living_room = rooms
        .living_room
        .as_deref()
        .map(|d| classify(d, LIVING_ROOM_RULES, LIVING_ROOM_FALLBACK));
    captions.bedroom = rooms
        .bedroom
        .as_deref()
        .map(|d| classify(d, BEDROOM_RULES, BEDROOM_FALLBACK));
    captions.sauna = rooms
        .sauna
        .as_deref()
        .map(|d| classify(d, SAUNA_RULES, SAUNA_FALLBACK));
    captions.bathroom = rooms
        .bathroom
        .as_deref()
        .map(|d| classify(d, BATHROOM_RULES, BATHROOM_FALLBACK));
    captions.other = rooms
        .other
        .as_deref()
        .map(|d| classify(d, OTHER_RULES, OTHER_FALLBACK));

    captions.intro = year.parse::<i32>().ok().and_then(|y| {
        if y < HISTORIC_YEAR {
            Some(format!("Historiallinen {year}-luvun helmi \u{2728}"))
        } else if y > MODERN_YEAR {
            Some("Moderni ja energiatehokas \u{1f331}".to_string())
        } else {
            None
        }
    });

    if !price.is_empty() {
        captions.price = Some(price.to_string());
    }
    if !size.is_empty() {
        captions.size = Some(format!("{size} tilaa el\u{e4}m\u{e4}lle"));
    }

    captions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rooms_with_kitchen(desc: &str) -> RoomDescriptions {
        RoomDescriptions {
            kitchen: Some(desc.to_string()),
            ..RoomDescriptions::default()
        }
    }

    #[test]
    fn renovated_kitchen_wins_over_spacious() {
        let rooms = rooms_with_kitchen("Remontoitu ja tilava keitti\u{f6}");
        let captions = generate_captions(&rooms, "", "", "");
        assert_eq!(
            captions.kitchen.as_deref(),
            Some("Uudistettu keitti\u{f6} \u{2728}")
        );
    }

    #[test]
    fn kitchen_classification_is_case_insensitive() {
        let rooms = rooms_with_kitchen("REMONTOITU KEITTI\u{d6}");
        let captions = generate_captions(&rooms, "", "", "");
        assert_eq!(
            captions.kitchen.as_deref(),
            Some("Uudistettu keitti\u{f6} \u{2728}")
        );
    }

    #[test]
    fn unmatched_kitchen_falls_back_to_default() {
        let rooms = rooms_with_kitchen("Keitti\u{f6}ss\u{e4} kaasuliesi");
        let captions = generate_captions(&rooms, "", "", "");
        assert_eq!(captions.kitchen.as_deref(), Some("Kodin syd\u{e4}n \u{1f49b}"));
    }

    #[test]
    fn fireplace_beats_spaciousness_in_living_room() {
        let rooms = RoomDescriptions {
            living_room: Some("Avara olohuone, jossa takka".to_string()),
            ..RoomDescriptions::default()
        };
        let captions = generate_captions(&rooms, "", "", "");
        assert_eq!(
            captions.living_room.as_deref(),
            Some("Takkahuone tunnelmaan \u{1f525}")
        );
    }

    #[test]
    fn absent_rooms_yield_no_captions() {
        let captions = generate_captions(&RoomDescriptions::default(), "", "", "");
        assert!(captions.kitchen.is_none());
        assert!(captions.living_room.is_none());
        assert!(captions.bedroom.is_none());
        assert!(captions.sauna.is_none());
        assert!(captions.bathroom.is_none());
        assert!(captions.other.is_none());
    }

    #[test]
    fn exterior_is_always_present() {
        let captions = generate_captions(&RoomDescriptions::default(), "", "", "");
        assert_eq!(captions.exterior, "Tervetuloa kotiin! \u{1f3e0}");
    }

    #[test]
    fn intro_historic_below_threshold() {
        let captions = generate_captions(&RoomDescriptions::default(), "", "", "1959");
        assert_eq!(
            captions.intro.as_deref(),
            Some("Historiallinen 1959-luvun helmi \u{2728}")
        );
    }

    #[test]
    fn intro_modern_above_threshold() {
        let captions = generate_captions(&RoomDescriptions::default(), "", "", "2011");
        assert_eq!(
            captions.intro.as_deref(),
            Some("Moderni ja energiatehokas \u{1f331}")
        );
    }

    #[test]
    fn intro_absent_inside_band_and_at_bounds() {
        for year in ["1960", "1985", "2010", ""] {
            let captions = generate_captions(&RoomDescriptions::default(), "", "", year);
            assert!(captions.intro.is_none(), "unexpected intro for year {year:?}");
        }
    }

    #[test]
    fn price_and_size_highlights_follow_presence() {
        let captions =
            generate_captions(&RoomDescriptions::default(), "249 000 \u{20ac}", "120,5 m\u{b2}", "");
        assert_eq!(captions.price.as_deref(), Some("249 000 \u{20ac}"));
        assert_eq!(
            captions.size.as_deref(),
            Some("120,5 m\u{b2} tilaa el\u{e4}m\u{e4}lle")
        );

        let empty = generate_captions(&RoomDescriptions::default(), "", "", "");
        assert!(empty.price.is_none());
        assert!(empty.size.is_none());
    }

    #[test]
    fn generation_is_deterministic() {
        let rooms = RoomDescriptions {
            kitchen: Some("remontoitu keitti\u{f6}".to_string()),
            sauna: Some("Saunassa puukiuas".to_string()),
            other: Some("Autotalli".to_string()),
            ..RoomDescriptions::default()
        };
        let a = generate_captions(&rooms, "100 000 \u{20ac}", "80 m\u{b2}", "1955");
        let b = generate_captions(&rooms, "100 000 \u{20ac}", "80 m\u{b2}", "1955");
        assert_eq!(a, b);
        assert_eq!(a.sauna.as_deref(), Some("Aito puusauna \u{1f9d6}"));
        assert_eq!(
            a.other.as_deref(),
            Some("Monik\u{e4}ytt\u{f6}ist\u{e4} tilaa \u{1f4e6}")
        );
    }
}
