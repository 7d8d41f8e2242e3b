//! Tabsnip - render one configuration example as yaml, toml and json tabs.
//!
//! The renderer lives in [`snippet`]; [`emit`] turns its blocks into widget
//! markup and [`cli`] drives both from snippet files at docs build time.

pub mod logger;

pub mod cli;
pub mod config;
pub mod emit;
pub mod snippet;
pub mod utils;
