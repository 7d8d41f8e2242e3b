//! The closed set of output formats.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Serialization format of one tab.
///
/// The set is closed and its order is the left-to-right tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Yaml,
    Toml,
    Json,
}

impl Format {
    /// All formats in tab order.
    pub const ALL: [Format; 3] = [Format::Yaml, Format::Toml, Format::Json];

    /// Lowercase name, used as tab label and highlighting language.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
