//! Multi-format snippet rendering.
//!
//! One configuration example is shown as yaml, toml and json tabs:
//!
//! ```text
//! SnippetInput ──► serialize (per format, unless overridden)
//!              ──► normalize (trim + excerpt marker)
//!              ──► [RenderedBlock; 3]  (yaml, toml, json)
//! ```
//!
//! | Module      | Purpose                                   |
//! |-------------|-------------------------------------------|
//! | `format`    | Closed `Format` set and tab order         |
//! | `serialize` | Canonical text per format                 |
//! | `excerpt`   | Trimming and excerpt markers              |
//! | `input`     | `SnippetInput`, `Overrides`               |
//! | `assemble`  | Titles and blocks, `RenderOptions`        |
//! | `source`    | Loading snippets from authored files      |
//! | `error`     | `SnippetError`                            |

mod assemble;
mod error;
mod excerpt;
mod format;
mod input;
mod serialize;
pub mod source;

pub use assemble::{DEFAULT_PLACEHOLDER, RenderOptions, RenderedBlock};
pub use error::SnippetError;
pub use excerpt::{DEFAULT_MARKER, normalize, normalize_with};
pub use format::Format;
pub use input::{Overrides, SnippetInput};
pub use serialize::serialize;
