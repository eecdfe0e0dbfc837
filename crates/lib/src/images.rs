//! # Image URL Normalizer
//!
//! Listing markup references the same photo in two forms: a JSON-embedded
//! form with `/`-escaped slashes and a directly rendered absolute link.
//! Both are scanned. Paths are deduplicated by their decoded value (two raw
//! encodings can decode to the same fragment) and each unique path renders
//! into one fixed-resolution CDN URL.

use regex::Regex;

/// The CDN host serving property photos.
pub const CDN_HOST: &str = "d3ls91xgksobn.cloudfront.net";

/// Fixed resolution/quality profile for canonical URLs.
const TRANSFORM: &str = "1920x1920,fit,q90";

/// Renders one decoded path fragment into its absolute, fixed-resolution URL.
/// Pure function of the path, no additional state.
pub fn canonical_image_url(path: &str) -> String {
    format!("https://{CDN_HOST}/{TRANSFORM}/etuovimedia/images/property/import/{path}/ORIGINAL.jpeg")
}

/// Compiled patterns for the two image reference forms.
pub struct ImageScanner {
    escaped: Regex,
    direct: Regex,
}

impl ImageScanner {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            // The page text carries literal `/` six-character sequences
            // between path segments, and a literal `{imageParameters}`
            // placeholder where the transform profile goes.
            escaped: Regex::new(
                r#"d3ls91xgksobn\.cloudfront\.net\\u002F\{imageParameters\}\\u002Fetuovimedia\\u002Fimages\\u002Fproperty\\u002Fimport\\u002F([^"]+?)\\u002FORIGINAL\.jpeg"#,
            )?,
            direct: Regex::new(
                r#"d3ls91xgksobn\.cloudfront\.net/[^"\s]+?/etuovimedia/images/property/import/([^"\s]+?)/ORIGINAL\.jpeg"#,
            )?,
        })
    }

    /// Scans both patterns and returns canonical URLs in first-seen order
    /// with no duplicates.
    ///
    /// The escaped pass runs first and deduplicates by decoded path. Direct
    /// matches are merged in afterwards, compared by exact string equality
    /// on the rendered absolute URL.
    pub fn scan(&self, html: &str) -> Vec<String> {
        let mut paths: Vec<String> = Vec::new();
        for cap in self.escaped.captures_iter(html) {
            let path = cap[1].replace("\\u002F", "/");
            if !paths.contains(&path) {
                paths.push(path);
            }
        }

        let mut urls: Vec<String> = paths.iter().map(|p| canonical_image_url(p)).collect();
        for cap in self.direct.captures_iter(html) {
            let url = canonical_image_url(&cap[1]);
            if !urls.contains(&url) {
                urls.push(url);
            }
        }
        urls
    }
}
