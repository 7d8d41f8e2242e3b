//! Trimming and excerpt marking of rendered text.
//!
//! An excerpt is a fragment of a larger document. Each format gets its own
//! marker convention:
//!
//! ```text
//! yaml / toml          json
//! -----------          ----
//! ...                  {
//!                      ...
//! name: demo
//!                        "name": "demo"
//!                      }
//! ```
//!
//! json has no comments, so the marker is spliced in after the opening
//! brace: the first character of the body is dropped and `{\n<marker>\n`
//! takes its place. The result is display text only and is never re-parsed.

use super::Format;

/// Marker placed at the top of an excerpt.
pub const DEFAULT_MARKER: &str = "...";

/// Normalize `raw` for display using the default marker.
#[inline]
pub fn normalize(format: Format, raw: &str, is_excerpt: bool) -> String {
    let marker = is_excerpt.then_some(DEFAULT_MARKER);
    normalize_with(format, raw, marker)
}

/// Normalize `raw` for display, marking it with `marker` when given.
///
/// The text is always trimmed. For json excerpts the first character is
/// removed unconditionally, even when the body is not an object.
pub fn normalize_with(format: Format, raw: &str, marker: Option<&str>) -> String {
    let body = raw.trim();

    let Some(marker) = marker else {
        return body.to_owned();
    };

    match format {
        Format::Yaml | Format::Toml => format!("{marker}\n\n{body}"),
        Format::Json => {
            let mut chars = body.chars();
            chars.next();
            format!("{{\n{marker}\n{}", chars.as_str())
        }
    }
}
