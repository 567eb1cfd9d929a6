//! Convert command implementation

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use toc_outline::{ListKind, Outline, TocConfig, outline_from_json, render_html, render_nav};

/// Output formats supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Nested HTML list
    Html,
    /// The outline tree as JSON
    Json,
    /// The rendered list as a JSON vnode tree
    Vnode,
}

/// Resolved command-line options.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub config_path: Option<PathBuf>,
    pub depth: Option<u8>,
    pub ordered: bool,
    pub title: Option<String>,
}

pub fn execute(options: &ConvertOptions) -> Result<()> {
    let config = resolve_config(options)?;
    let json = read_input(options.input.as_deref())?;

    let outline = outline_from_json(&json, &config).context("Failed to read blocks")?;
    tracing::info!(
        entries = outline.len(),
        roots = outline.entries.len(),
        "Generated outline"
    );

    let rendered = render_output(&outline, &config, options.format)?;
    write_output(options.output.as_deref(), &rendered)
}

/// Load the config file (if any) and apply command-line overrides.
pub fn resolve_config(options: &ConvertOptions) -> Result<TocConfig> {
    let mut config = match &options.config_path {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            TocConfig::from_toml_str(&source)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => TocConfig::default(),
    };

    if let Some(depth) = options.depth {
        config.depth = depth;
    }
    if options.ordered {
        config.list = ListKind::Ordered;
    }
    if let Some(title) = &options.title {
        config.title = Some(title.clone());
    }

    config.validate()?;
    tracing::debug!(?config, "Resolved configuration");
    Ok(config)
}

pub fn render_output(outline: &Outline, config: &TocConfig, format: OutputFormat) -> Result<String> {
    let mut rendered = match format {
        OutputFormat::Html => render_html(outline, config),
        OutputFormat::Json => outline.to_json_string()?,
        OutputFormat::Vnode => serde_json::to_string_pretty(&render_nav(outline, config.list))?,
    };
    rendered.push('\n');
    Ok(rendered)
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read blocks from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(output: Option<&Path>, rendered: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write output file {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
