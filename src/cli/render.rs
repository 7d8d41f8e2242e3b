//! `render` command: one snippet file to stdout or a file.

use anyhow::{Context, Result};

use super::RenderArgs;
use super::common::write_output;
use crate::config::ProjectConfig;
use crate::log;
use crate::snippet::SnippetInput;

/// Render a single snippet with CLI overrides applied.
pub fn render_file(args: &RenderArgs, config: &ProjectConfig) -> Result<()> {
    let output = render_to_string(args, config)?;

    match &args.out {
        Some(path) => {
            write_output(path, &output)?;
            log!("render"; "wrote {}", path.display());
        }
        None => print!("{output}"),
    }

    Ok(())
}

fn render_to_string(args: &RenderArgs, config: &ProjectConfig) -> Result<String> {
    let mut input = SnippetInput::from_path(&args.file)?;
    if args.excerpt {
        input.is_excerpt = true;
    }
    if let Some(title) = &args.title {
        input.title_template.clone_from(title);
    }

    let blocks = input
        .render_with(&config.render.options())
        .with_context(|| format!("failed to render `{}`", args.file.display()))?;

    config.render.emitter.emit(&blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::Emitter;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(file: PathBuf) -> RenderArgs {
        RenderArgs {
            file,
            emitter: None,
            excerpt: false,
            title: None,
            out: None,
        }
    }

    fn json_config() -> ProjectConfig {
        let mut config = ProjectConfig::default();
        config.render.emitter = Emitter::Json;
        config
    }

    #[test]
    fn test_render_with_cli_overrides() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("dot.toml");
        fs::write(&file, "title = \"t\"\n[data]\nname = \"demo\"\n").unwrap();

        let mut args = args(file);
        args.excerpt = true;
        args.title = Some("dot.{{ format }}".into());

        let out = render_to_string(&args, &json_config()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["title"], "dot.yaml");
        assert_eq!(parsed[0]["body"], "...\n\nname: demo");
        assert_eq!(parsed[2]["body"], "{\n...\n\n  \"name\": \"demo\"\n}");
    }

    #[test]
    fn test_render_writes_out_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("dot.yaml");
        fs::write(&file, "title: dot\ndata:\n  a: 1\n").unwrap();

        let mut args = args(file);
        args.out = Some(dir.path().join("out/dot.mdx"));
        render_file(&args, &ProjectConfig::default()).unwrap();

        let written = fs::read_to_string(dir.path().join("out/dot.mdx")).unwrap();
        assert!(written.starts_with("<Tabs>"));
    }

    #[test]
    fn test_render_error_names_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("bad.json");
        fs::write(&file, r#"{ "title": "t", "data": "scalar" }"#).unwrap();

        let err = render_to_string(&args(file), &json_config()).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
        assert!(format!("{err:#}").contains("toml"));
    }
}
