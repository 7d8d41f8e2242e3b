//! Canonical serialization of a structured value into each format.

use serde::Serialize;

use super::{Format, SnippetError};

/// Serialize `value` into the canonical text of `format`.
///
/// - yaml: block style, no `---` document marker
/// - toml: `[table]` headers, `\n` line endings, root must be a table
/// - json: pretty-printed with two-space indentation
pub fn serialize<T>(format: Format, value: &T) -> Result<String, SnippetError>
where
    T: Serialize + ?Sized,
{
    let result = match format {
        Format::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        Format::Toml => toml::to_string(value).map_err(|e| e.to_string()),
        Format::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
    };

    result.map_err(|message| SnippetError::Serialization { format, message })
}
