//! Snippet error types.

use std::path::PathBuf;

use thiserror::Error;

use super::Format;

/// Errors raised while loading or rendering a snippet.
///
/// All of them are authoring mistakes; a documentation build should stop on
/// the first one instead of publishing a broken example.
#[derive(Debug, Error)]
pub enum SnippetError {
    /// Some format has neither a source value nor an override.
    #[error("no value and no override for {}", join_formats(.missing))]
    Configuration { missing: Vec<Format> },

    #[error("cannot render value as {format}: {message}")]
    Serialization { format: Format, message: String },

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid snippet file `{path}`: {message}")]
    Source { path: PathBuf, message: String },

    /// Snippet text given without a file.
    #[error("invalid {format} snippet: {message}")]
    Parse { format: Format, message: String },
}

fn join_formats(formats: &[Format]) -> String {
    formats
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_lists_formats() {
        let err = SnippetError::Configuration {
            missing: vec![Format::Toml, Format::Json],
        };
        assert_eq!(err.to_string(), "no value and no override for toml, json");
    }

    #[test]
    fn test_source_error_display() {
        let err = SnippetError::Source {
            path: PathBuf::from("snippets/dot.toml"),
            message: "missing field `title`".into(),
        };
        let display = err.to_string();
        assert!(display.contains("snippets/dot.toml"));
        assert!(display.contains("missing field"));
    }

    #[test]
    fn test_parse_error_names_format_not_path() {
        let err = SnippetError::Parse {
            format: Format::Yaml,
            message: "missing field `title`".into(),
        };
        assert_eq!(err.to_string(), "invalid yaml snippet: missing field `title`");
    }
}
