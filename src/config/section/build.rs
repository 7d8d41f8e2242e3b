//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! input = "snippets"      # Snippet source directory (relative to project root)
//! output = "generated"    # Rendered output directory (relative to project root)
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Batch rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Directory scanned for snippet files.
    pub input: PathBuf,

    /// Directory receiving rendered files.
    pub output: PathBuf,

    /// Remove the output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            input: "snippets".into(),
            output: "generated".into(),
            clean: false,
        }
    }
}

impl BuildSectionConfig {
    /// Expects normalized (absolute) paths.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.output == self.input {
            diag.error("build.output", "output directory must differ from input");
        } else if self.output.starts_with(&self.input) {
            diag.error_with_hint(
                "build.output",
                "output directory must not be inside the input directory",
                "rendered json files would be picked up as snippets",
            );
        } else if self.input.starts_with(&self.output) {
            diag.error(
                "build.output",
                "output directory must not contain the input directory",
            );
        }
    }
}
