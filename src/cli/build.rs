//! `build` command: render every snippet under the input directory.
//!
//! Each `input/<rel>.<toml|yaml|yml|json>` becomes `output/<rel>.<ext>`,
//! where `ext` comes from the emitter. Any failure fails the build after
//! all snippets have been tried.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use rustc_hash::FxHashMap;

use super::common::{collect_input_files, render_snippet, report_failures, run_parallel, write_output};
use crate::config::ProjectConfig;
use crate::log;
use crate::utils::plural_count;

/// Source file and the output path it renders to.
struct Target {
    source: PathBuf,
    output: PathBuf,
}

/// Build all snippets. Returns the number of files written.
pub fn build_snippets(config: &ProjectConfig, quiet: bool) -> Result<usize> {
    let files = collect_input_files(config)?;
    let targets = plan_targets(config, files)?;

    clean_output(config)?;

    let options = config.render.options();
    let emitter = config.render.emitter;

    let failures = run_parallel("build", &targets, quiet, |target| {
        render_snippet(&target.source, &options)
            .map_err(anyhow::Error::from)
            .and_then(|blocks| emitter.emit(&blocks))
            .and_then(|content| write_output(&target.output, &content))
            .map_err(|err| (target.source.clone(), err))
    });

    report_failures(config, &failures)?;

    if !quiet {
        log!(
            "build";
            "rendered {} into {}",
            plural_count(targets.len(), "snippet"),
            config.root_relative(&config.build.output).display()
        );
    }

    Ok(targets.len())
}

/// Map each source to its output path, rejecting collisions.
fn plan_targets(config: &ProjectConfig, files: Vec<PathBuf>) -> Result<Vec<Target>> {
    let extension = config.render.emitter.extension();
    let mut seen: FxHashMap<PathBuf, PathBuf> = FxHashMap::default();
    let mut targets = Vec::with_capacity(files.len());

    for source in files {
        let relative = source
            .strip_prefix(&config.build.input)
            .with_context(|| format!("`{}` is outside the input directory", source.display()))?;
        let output = config.build.output.join(relative).with_extension(extension);

        if let Some(previous) = seen.insert(output.clone(), source.clone()) {
            bail!(
                "`{}` and `{}` both render to `{}`",
                config.root_relative(&previous).display(),
                config.root_relative(&source).display(),
                config.root_relative(&output).display()
            );
        }

        targets.push(Target { source, output });
    }

    Ok(targets)
}

/// Remove the output directory when `--clean` is given.
fn clean_output(config: &ProjectConfig) -> Result<()> {
    let output = &config.build.output;
    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("failed to clean `{}`", output.display()))?;
        crate::debug!("build"; "cleaned {}", output.display());
    }
    Ok(())
}
