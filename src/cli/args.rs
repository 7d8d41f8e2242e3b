//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::emit::Emitter;

/// Render configuration snippets as yaml, toml and json tabs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: tabsnip.toml)
    #[arg(short = 'C', long, global = true, default_value = "tabsnip.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render a single snippet file
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Render every snippet under the input directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Check that every snippet renders, without writing output
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        input_args: InputArgs,
    },
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Snippet file (.toml, .yaml, .yml or .json)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    /// Output markup
    #[arg(short, long, value_enum)]
    pub emitter: Option<Emitter>,

    /// Mark the snippet as an excerpt regardless of the file
    #[arg(short = 'x', long)]
    pub excerpt: bool,

    /// Override the title template
    #[arg(short, long)]
    pub title: Option<String>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub out: Option<PathBuf>,
}

/// Snippet input directory, shared by Build and Check
#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
    /// Snippet source directory (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub input: Option<PathBuf>,
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    #[command(flatten)]
    pub input_args: InputArgs,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Output markup
    #[arg(short, long, value_enum)]
    pub emitter: Option<Emitter>,

    /// Clean output directory completely before building
    #[arg(short, long)]
    pub clean: bool,
}
