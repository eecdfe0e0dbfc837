//! # Escape Decoder
//!
//! Etuovi serializes its page state as JSON embedded in the HTML, so string
//! values arrive with escaped newlines, forward slashes (`/`), and
//! double quotes. This module reverses that fixed set of escape tokens.

/// Decodes the escape tokens found in JSON-in-HTML string values and trims
/// surrounding whitespace.
///
/// Idempotent: decoding an already-decoded string is a no-op apart from the
/// trim.
pub fn decode_embedded_text(raw: &str) -> String {
    raw.replace("\\n", "\n")
        .replace("\\u002F", "/")
        .replace("\\\"", "\"")
        .trim()
        .to_string()
}
