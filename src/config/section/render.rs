//! `[render]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [render]
//! placeholder = "{{ format }}"   # Token in snippet titles replaced by the format name
//! marker = "..."                 # First line of excerpt snippets
//! emitter = "mdx"                # Output markup: mdx | markdown | json
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::emit::Emitter;
use crate::snippet::{DEFAULT_MARKER, DEFAULT_PLACEHOLDER, RenderOptions};

/// Snippet rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSectionConfig {
    /// Title placeholder token.
    pub placeholder: String,

    /// Excerpt marker line.
    pub marker: String,

    /// Output markup for rendered snippets.
    pub emitter: Emitter,
}

impl Default for RenderSectionConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            marker: DEFAULT_MARKER.to_owned(),
            emitter: Emitter::default(),
        }
    }
}

impl RenderSectionConfig {
    pub fn options(&self) -> RenderOptions {
        RenderOptions {
            placeholder: self.placeholder.clone(),
            marker: self.marker.clone(),
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.placeholder.is_empty() {
            diag.error_with_hint(
                "render.placeholder",
                "placeholder must not be empty",
                "use the default `{{ format }}`",
            );
        }
        if self.marker.trim().is_empty() {
            diag.error("render.marker", "marker must not be blank");
        } else if self.marker.contains('\n') {
            diag.error("render.marker", "marker must be a single line");
        }
    }
}
