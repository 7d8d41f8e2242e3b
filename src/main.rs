//! Tabsnip CLI entry point.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tabsnip::{
    cli::{self, Cli, Commands},
    config::ProjectConfig,
    logger,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = ProjectConfig::load(&cli)?;

    match &cli.command {
        Commands::Render { args } => cli::render::render_file(args, &config),
        Commands::Build { .. } => cli::build::build_snippets(&config, false).map(|_| ()),
        Commands::Check { .. } => cli::check::check_snippets(&config, false).map(|_| ()),
    }
}
