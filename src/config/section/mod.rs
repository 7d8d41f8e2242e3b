//! Configuration section definitions.
//!
//! Each module corresponds to a section in `tabsnip.toml`:
//!
//! | Module   | TOML Section | Purpose                               |
//! |----------|--------------|---------------------------------------|
//! | `build`  | `[build]`    | Snippet input and output directories  |
//! | `render` | `[render]`   | Placeholder, excerpt marker, emitter  |

mod build;
mod render;

pub use build::BuildSectionConfig;
pub use render::RenderSectionConfig;
