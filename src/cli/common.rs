//! Common utilities shared across CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use jwalk::WalkDir;
use rayon::prelude::*;

use crate::config::ProjectConfig;
use crate::log;
use crate::logger::ProgressLine;
use crate::snippet::{RenderOptions, RenderedBlock, SnippetError, SnippetInput, source};
use crate::utils::plural_count;

/// A snippet file that failed, with its error.
pub type Failure = (PathBuf, anyhow::Error);

/// Collect snippet files under `dir` recursively, sorted for stable output.
///
/// A directory that cannot be read is an error, not an empty subtree.
pub fn collect_snippet_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("failed to walk `{}`", dir.display()))?;
        if let Some(err) = &entry.read_children_error {
            bail!("failed to read `{}`: {}", entry.path().display(), err);
        }

        let path = entry.path();
        if entry.file_type().is_file() && source::source_format(&path).is_some() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Collect snippet files from the configured input directory.
pub fn collect_input_files(config: &ProjectConfig) -> Result<Vec<PathBuf>> {
    let input = &config.build.input;
    if !input.is_dir() {
        bail!("snippet directory `{}` not found", input.display());
    }
    collect_snippet_files(input)
}

/// Load a snippet file and render it with the project options.
pub fn render_snippet(
    path: &Path,
    options: &RenderOptions,
) -> Result<[RenderedBlock; 3], SnippetError> {
    SnippetInput::from_path(path)?.render_with(options)
}

/// Run `job` over `items` in parallel, counting progress under `module`.
///
/// Returns the failures in input order.
pub fn run_parallel<T, F>(module: &'static str, items: &[T], quiet: bool, job: F) -> Vec<Failure>
where
    T: Sync,
    F: Fn(&T) -> std::result::Result<(), Failure> + Sync,
{
    let progress = (!quiet && !items.is_empty())
        .then(|| ProgressLine::new(module, &[("snippets", items.len())]));

    let failures: Vec<Failure> = items
        .par_iter()
        .filter_map(|item| {
            let result = job(item);
            if let Some(p) = &progress {
                p.inc("snippets");
            }
            result.err()
        })
        .collect();

    if let Some(p) = progress {
        p.finish();
    }

    failures
}

/// Log every failure and turn a non-empty list into an error.
pub fn report_failures(config: &ProjectConfig, failures: &[Failure]) -> Result<()> {
    if failures.is_empty() {
        return Ok(());
    }

    for (path, err) in failures {
        log!("error"; "{}: {:#}", config.root_relative(path).display(), err);
    }
    bail!(
        "{} failed to render",
        plural_count(failures.len(), "snippet")
    )
}

/// Write `content` to `path`, creating parent directories.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create `{}`", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write `{}`", path.display()))
}
