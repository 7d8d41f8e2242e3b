//! Tab assembly: one titled, normalized block per format.

use std::borrow::Cow;

use serde::Serialize;

use super::{DEFAULT_MARKER, Format, SnippetError, SnippetInput, normalize_with, serialize};
use crate::debug;

/// Placeholder replaced by the format name in title templates.
pub const DEFAULT_PLACEHOLDER: &str = "{{ format }}";

/// Knobs shared by every render of a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Token in the title template replaced by the format name.
    pub placeholder: String,
    /// First line of an excerpt.
    pub marker: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            marker: DEFAULT_MARKER.to_owned(),
        }
    }
}

impl RenderOptions {
    /// Substitute the first occurrence of the placeholder with the format name.
    pub fn title_for(&self, template: &str, format: Format) -> String {
        if self.placeholder.is_empty() {
            return template.to_owned();
        }
        template.replacen(&self.placeholder, format.name(), 1)
    }
}

/// One tab handed to the code display widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedBlock {
    /// Tab key and highlighting language.
    #[serde(rename = "label")]
    pub format: Format,
    pub title: String,
    pub body: String,
}

impl RenderedBlock {
    #[inline]
    pub const fn label(&self) -> &'static str {
        self.format.name()
    }
}

impl SnippetInput {
    /// Render with the default placeholder and marker.
    pub fn render(&self) -> Result<[RenderedBlock; 3], SnippetError> {
        self.render_with(&RenderOptions::default())
    }

    /// Render the three blocks in tab order (yaml, toml, json).
    ///
    /// Fails before serializing anything if a format has no text source.
    pub fn render_with(&self, options: &RenderOptions) -> Result<[RenderedBlock; 3], SnippetError> {
        self.validate()?;

        let [yaml, toml, json] = Format::ALL;
        Ok([
            self.render_block(yaml, options)?,
            self.render_block(toml, options)?,
            self.render_block(json, options)?,
        ])
    }

    fn render_block(
        &self,
        format: Format,
        options: &RenderOptions,
    ) -> Result<RenderedBlock, SnippetError> {
        let raw = self.resolve_text(format)?;
        let marker = self.is_excerpt.then_some(options.marker.as_str());

        Ok(RenderedBlock {
            format,
            title: options.title_for(&self.title_template, format),
            body: normalize_with(format, &raw, marker),
        })
    }

    /// Override text if present, otherwise the serialized value.
    fn resolve_text(&self, format: Format) -> Result<Cow<'_, str>, SnippetError> {
        if let Some(text) = self.format_overrides.get(format) {
            debug!("snippet"; "using {} override for `{}`", format, self.title_template);
            return Ok(Cow::Borrowed(text));
        }

        match &self.source_value {
            Some(value) => serialize(format, value).map(Cow::Owned),
            None => Err(SnippetError::Configuration {
                missing: vec![format],
            }),
        }
    }
}
