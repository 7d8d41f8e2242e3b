//! Command-line interface module.

mod args;
pub mod build;
pub mod check;
pub mod common;
pub mod render;

pub use args::{BuildArgs, Cli, Commands, InputArgs, RenderArgs};
