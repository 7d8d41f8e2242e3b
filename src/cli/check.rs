//! `check` command: render every snippet without writing anything.

use anyhow::Result;

use super::common::{collect_input_files, render_snippet, report_failures, run_parallel};
use crate::config::ProjectConfig;
use crate::log;
use crate::utils::plural_count;

/// Check all snippets under the input directory. Returns the number checked.
pub fn check_snippets(config: &ProjectConfig, quiet: bool) -> Result<usize> {
    let files = collect_input_files(config)?;
    let options = config.render.options();

    let failures = run_parallel("check", &files, quiet, |path| {
        render_snippet(path, &options)
            .map(|_| ())
            .map_err(|err| (path.clone(), err.into()))
    });

    report_failures(config, &failures)?;

    if !quiet {
        log!("check"; "{} ok", plural_count(files.len(), "snippet"));
    }

    Ok(files.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_check_passes_and_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut config = ProjectConfig::default();
        config.build.input = dir.path().join("snippets");
        config.build.output = dir.path().join("generated");
        fs::create_dir_all(&config.build.input).unwrap();
        fs::write(
            config.build.input.join("a.toml"),
            "title = \"a\"\n[data]\na = 1\n",
        )
        .unwrap();

        assert_eq!(check_snippets(&config, true).unwrap(), 1);
        assert!(!config.build.output.exists());
    }

    #[test]
    fn test_check_fails_on_configuration_error() {
        let dir = TempDir::new().unwrap();
        let mut config = ProjectConfig::default();
        config.build.input = dir.path().to_path_buf();
        fs::write(
            dir.path().join("partial.json"),
            r#"{ "title": "p", "overrides": { "yaml": "a: 1" } }"#,
        )
        .unwrap();

        let err = check_snippets(&config, true).unwrap_err();
        assert_eq!(err.to_string(), "1 snippet failed to render");
    }
}
