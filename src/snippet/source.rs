//! Loading snippets from authored files.
//!
//! A snippet file may itself be written in any of the three formats; the
//! file extension picks the parser.
//!
//! ```toml
//! title = "dot.{{ format }}"
//! excerpt = true
//!
//! [data]
//! name = "demo"
//!
//! [overrides]
//! toml = 'name = "demo"'
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::{Format, Overrides, SnippetError, SnippetInput};

/// Extensions recognized as snippet files.
pub const SNIPPET_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// On-disk shape of a snippet.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SnippetFile {
    title: String,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    overrides: Overrides,
    #[serde(default, alias = "predots")]
    excerpt: bool,
}

impl From<SnippetFile> for SnippetInput {
    fn from(file: SnippetFile) -> Self {
        Self {
            title_template: file.title,
            source_value: file.data,
            format_overrides: file.overrides,
            is_excerpt: file.excerpt,
        }
    }
}

/// Format of a snippet file, from its extension.
pub fn source_format(path: &Path) -> Option<Format> {
    match path.extension()?.to_str()? {
        "toml" => Some(Format::Toml),
        "yaml" | "yml" => Some(Format::Yaml),
        "json" => Some(Format::Json),
        _ => None,
    }
}

impl SnippetInput {
    /// Load a snippet file; the extension selects the parser.
    pub fn from_path(path: &Path) -> Result<Self, SnippetError> {
        let format = source_format(path).ok_or_else(|| SnippetError::Source {
            path: path.to_path_buf(),
            message: format!(
                "unsupported extension, expected one of: {}",
                SNIPPET_EXTENSIONS.join(", ")
            ),
        })?;

        let content =
            fs::read_to_string(path).map_err(|err| SnippetError::Io(path.to_path_buf(), err))?;

        Self::parse(&content, format).map_err(|message| SnippetError::Source {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse snippet source text written in `format`.
    pub fn from_source(content: &str, format: Format) -> Result<Self, SnippetError> {
        Self::parse(content, format).map_err(|message| SnippetError::Parse { format, message })
    }

    fn parse(content: &str, format: Format) -> Result<Self, String> {
        let file: SnippetFile = match format {
            Format::Toml => {
                let mut table: toml::Table = toml::from_str(content).map_err(|e| e.to_string())?;
                table.iter_mut().for_each(|(_, value)| datetime_to_string(value));
                toml::Value::Table(table)
                    .try_into()
                    .map_err(|e| e.to_string())?
            }
            Format::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string())?,
            Format::Json => serde_json::from_str(content).map_err(|e| e.to_string())?,
        };
        Ok(file.into())
    }
}

/// Replace toml datetimes with their text.
///
/// `serde_json::Value` has no datetime, and deserializing one directly leaks
/// the toml crate's private marker table into every tab.
fn datetime_to_string(value: &mut toml::Value) {
    match value {
        toml::Value::Datetime(datetime) => {
            let text = datetime.to_string();
            *value = toml::Value::String(text);
        }
        toml::Value::Array(items) => items.iter_mut().for_each(datetime_to_string),
        toml::Value::Table(table) => table
            .iter_mut()
            .for_each(|(_, value)| datetime_to_string(value)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_source_format_by_extension() {
        assert_eq!(source_format(Path::new("a.toml")), Some(Format::Toml));
        assert_eq!(source_format(Path::new("a.yml")), Some(Format::Yaml));
        assert_eq!(source_format(Path::new("a.yaml")), Some(Format::Yaml));
        assert_eq!(source_format(Path::new("a.json")), Some(Format::Json));
        assert_eq!(source_format(Path::new("a.md")), None);
        assert_eq!(source_format(Path::new("toml")), None);
    }

    #[test]
    fn test_parse_toml_source() {
        let content = r#"
title = "dot.{{ format }}"
excerpt = true

[data]
name = "demo"

[overrides]
toml = 'name = "demo"'
"#;
        let input = SnippetInput::from_source(content, Format::Toml).unwrap();
        assert_eq!(input.title_template, "dot.{{ format }}");
        assert!(input.is_excerpt);
        assert_eq!(input.source_value, Some(json!({ "name": "demo" })));
        assert_eq!(input.format_overrides.get(Format::Toml), Some("name = \"demo\""));
    }

    #[test]
    fn test_parse_yaml_source_with_predots_alias() {
        let content = "title: config\npredots: true\ndata:\n  links:\n    - a\n    - b\n";
        let input = SnippetInput::from_source(content, Format::Yaml).unwrap();
        assert!(input.is_excerpt);
        assert_eq!(input.source_value, Some(json!({ "links": ["a", "b"] })));
    }

    #[test]
    fn test_parse_json_source_overrides_only() {
        let content = r#"{
  "title": "t",
  "overrides": { "yaml": "a: 1", "toml": "a = 1", "json": "{\"a\": 1}" }
}"#;
        let input = SnippetInput::from_source(content, Format::Json).unwrap();
        assert!(input.source_value.is_none());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = SnippetInput::from_source("title = \"t\"\ntitel = \"x\"", Format::Toml)
            .unwrap_err();
        assert!(matches!(
            err,
            SnippetError::Parse {
                format: Format::Toml,
                ..
            }
        ));
        assert!(err.to_string().starts_with("invalid toml snippet: "));
    }

    #[test]
    fn test_toml_datetimes_become_strings() {
        let content = "title = \"t\"\n[data]\ncreated = 1979-05-27T07:32:00Z\nreleases = [1979-05-27]\n[data.window]\nopens = 07:32:00\n";
        let input = SnippetInput::from_source(content, Format::Toml).unwrap();
        assert_eq!(
            input.source_value,
            Some(json!({
                "created": "1979-05-27T07:32:00Z",
                "releases": ["1979-05-27"],
                "window": { "opens": "07:32:00" }
            }))
        );

        let blocks = input.render().unwrap();
        for block in &blocks {
            assert!(!block.body.contains("toml_private"), "{}", block.body);
        }
        assert!(blocks[1].body.starts_with("created = \"1979-05-27T07:32:00Z\""));
        assert!(blocks[2].body.contains("\"created\": \"1979-05-27T07:32:00Z\""));
    }

    #[test]
    fn test_toml_datetime_in_title_is_text() {
        let input = SnippetInput::from_source("title = 1979-05-27", Format::Toml).unwrap();
        assert_eq!(input.title_template, "1979-05-27");
    }

    #[test]
    fn test_unknown_override_format_rejected() {
        let content = "title = \"t\"\n[overrides]\nini = \"a=1\"";
        assert!(SnippetInput::from_source(content, Format::Toml).is_err());
    }

    #[test]
    fn test_missing_title_rejected() {
        let err = SnippetInput::from_source("{}", Format::Json).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_from_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("demo.yaml");
        fs::write(&path, "title: \"demo.{{ format }}\"\ndata:\n  name: demo\n").unwrap();

        let blocks = SnippetInput::from_path(&path).unwrap().render().unwrap();
        assert_eq!(blocks[1].title, "demo.toml");
        assert_eq!(blocks[1].body, "name = \"demo\"");
    }

    #[test]
    fn test_from_path_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("demo.txt");
        fs::write(&path, "title = \"t\"").unwrap();

        let err = SnippetInput::from_path(&path).unwrap_err();
        assert!(err.to_string().contains("unsupported extension"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SnippetInput::from_path(Path::new("/nonexistent/demo.toml")).unwrap_err();
        assert!(matches!(err, SnippetError::Io(..)));
    }
}
