//! Emitters: rendered blocks to widget markup.
//!
//! | Emitter    | Output                                              |
//! |------------|-----------------------------------------------------|
//! | `mdx`      | `<Tabs>`/`<TabItem>`/`<CodeBlock>` for Docusaurus   |
//! | `markdown` | One fenced block per format with a `title` meta     |
//! | `json`     | `[{ "label", "title", "body" }, ...]`               |

mod markdown;
mod mdx;

use std::fmt;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::snippet::RenderedBlock;

/// Target markup for rendered snippets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Emitter {
    #[default]
    Mdx,
    Markdown,
    Json,
}

impl Emitter {
    /// File extension of emitted files.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Mdx => "mdx",
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }

    /// Emit the blocks; the output always ends with a newline.
    pub fn emit(self, blocks: &[RenderedBlock]) -> Result<String> {
        Ok(match self {
            Self::Mdx => mdx::emit(blocks),
            Self::Markdown => markdown::emit(blocks),
            Self::Json => {
                let mut out = serde_json::to_string_pretty(blocks)?;
                out.push('\n');
                out
            }
        })
    }
}

impl fmt::Display for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mdx => "mdx",
            Self::Markdown => "markdown",
            Self::Json => "json",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snippet::SnippetInput;
    use serde_json::{Value, json};

    #[test]
    fn test_json_emitter_triples() {
        let blocks = SnippetInput::new("dot.{{ format }}")
            .with_value(json!({ "name": "demo" }))
            .render()
            .unwrap();
        let out = Emitter::Json.emit(&blocks).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(
            parsed,
            json!([
                { "label": "yaml", "title": "dot.yaml", "body": "name: demo" },
                { "label": "toml", "title": "dot.toml", "body": "name = \"demo\"" },
                { "label": "json", "title": "dot.json", "body": "{\n  \"name\": \"demo\"\n}" }
            ])
        );
    }

    #[test]
    fn test_extensions() {
        assert_eq!(Emitter::Mdx.extension(), "mdx");
        assert_eq!(Emitter::Markdown.extension(), "md");
        assert_eq!(Emitter::Json.extension(), "json");
    }

    #[test]
    fn test_deserialize_from_config_value() {
        #[derive(Deserialize)]
        struct Wrapper {
            emitter: Emitter,
        }
        let w: Wrapper = toml::from_str("emitter = \"markdown\"").unwrap();
        assert_eq!(w.emitter, Emitter::Markdown);
    }
}
