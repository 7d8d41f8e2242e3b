//! Snippet input: title template, optional value, per-format overrides.

use serde::Deserialize;
use serde_json::Value;

use super::{Format, SnippetError};

/// Literal text per format, replacing the serialized value for that format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Overrides {
    pub yaml: Option<String>,
    pub toml: Option<String>,
    pub json: Option<String>,
}

impl Overrides {
    pub fn get(&self, format: Format) -> Option<&str> {
        self.slot(format).as_deref()
    }

    pub fn set(&mut self, format: Format, text: impl Into<String>) {
        *self.slot_mut(format) = Some(text.into());
    }

    pub fn is_empty(&self) -> bool {
        Format::ALL.iter().all(|f| self.get(*f).is_none())
    }

    const fn slot(&self, format: Format) -> &Option<String> {
        match format {
            Format::Yaml => &self.yaml,
            Format::Toml => &self.toml,
            Format::Json => &self.json,
        }
    }

    const fn slot_mut(&mut self, format: Format) -> &mut Option<String> {
        match format {
            Format::Yaml => &mut self.yaml,
            Format::Toml => &mut self.toml,
            Format::Json => &mut self.json,
        }
    }
}

/// One configuration example to render in every format.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tabsnip::snippet::{Format, SnippetInput};
///
/// let input = SnippetInput::new("config.{{ format }}")
///     .with_value(json!({ "x": 1 }))
///     .with_override(Format::Toml, "x = 1");
/// let blocks = input.render().unwrap();
/// assert_eq!(blocks[1].body, "x = 1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SnippetInput {
    /// Title with one placeholder token, e.g. `dot.{{ format }}`.
    pub title_template: String,
    pub source_value: Option<Value>,
    pub format_overrides: Overrides,
    /// Mark the output as a fragment of a larger document.
    pub is_excerpt: bool,
}

impl SnippetInput {
    pub fn new(title_template: impl Into<String>) -> Self {
        Self {
            title_template: title_template.into(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.source_value = Some(value);
        self
    }

    pub fn with_override(mut self, format: Format, text: impl Into<String>) -> Self {
        self.format_overrides.set(format, text);
        self
    }

    pub fn excerpt(mut self, is_excerpt: bool) -> Self {
        self.is_excerpt = is_excerpt;
        self
    }

    /// Formats that have neither a value nor an override.
    pub fn missing_formats(&self) -> Vec<Format> {
        if self.source_value.is_some() {
            return Vec::new();
        }
        Format::ALL
            .into_iter()
            .filter(|f| self.format_overrides.get(*f).is_none())
            .collect()
    }

    /// Check that every format has exactly one text source.
    pub fn validate(&self) -> Result<(), SnippetError> {
        let missing = self.missing_formats();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SnippetError::Configuration { missing })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_overrides_get_set() {
        let mut overrides = Overrides::default();
        assert!(overrides.is_empty());

        overrides.set(Format::Toml, "x = 1");
        assert_eq!(overrides.get(Format::Toml), Some("x = 1"));
        assert_eq!(overrides.get(Format::Yaml), None);
        assert!(!overrides.is_empty());
    }

    #[test]
    fn test_value_satisfies_all_formats() {
        let input = SnippetInput::new("t").with_value(json!({ "a": 1 }));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_all_overrides_without_value() {
        let input = SnippetInput::new("t")
            .with_override(Format::Yaml, "a: 1")
            .with_override(Format::Toml, "a = 1")
            .with_override(Format::Json, "{\"a\": 1}");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_missing_formats_reported_in_order() {
        let input = SnippetInput::new("t").with_override(Format::Toml, "a = 1");
        assert_eq!(input.missing_formats(), vec![Format::Yaml, Format::Json]);

        let err = input.validate().unwrap_err();
        assert!(matches!(
            err,
            SnippetError::Configuration { ref missing } if missing.len() == 2
        ));
    }

    #[test]
    fn test_empty_input_is_invalid() {
        let err = SnippetInput::new("t").validate().unwrap_err();
        assert_eq!(err.to_string(), "no value and no override for yaml, toml, json");
    }
}
