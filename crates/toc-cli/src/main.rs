//! vtoc - build a table of contents from virtual DOM blocks

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod convert;

use convert::{ConvertOptions, OutputFormat};

#[derive(Parser)]
#[command(name = "vtoc")]
#[command(version)]
#[command(about = "Build a table of contents from virtual DOM blocks", long_about = None)]
struct Cli {
    /// JSON file holding an array of blocks (omit or use '-' for stdin)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short = 't', long, value_enum, default_value_t = OutputFormat::Html)]
    to: OutputFormat,

    /// Write output to FILE instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Maximum heading level to include (1-6)
    #[arg(long)]
    depth: Option<u8>,

    /// Render an ordered list instead of an unordered one
    #[arg(long)]
    ordered: bool,

    /// Title for the table of contents
    #[arg(long)]
    title: Option<String>,

    /// TOML configuration file with a [toc] table
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with rendered output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vtoc=info,toc_outline=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    convert::execute(&ConvertOptions {
        input: cli.input,
        output: cli.output,
        format: cli.to,
        config_path: cli.config,
        depth: cli.depth,
        ordered: cli.ordered,
        title: cli.title,
    })
}
