//! Render a help document from the command line.
//!
//! ```text
//! send-help npm.yaml                 # summary of every command
//! send-help npm.yaml publish         # detail for one command
//! send-help npm.yaml publish --set registry=http://localhost:4873/
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use send_help::HelpDocument;
use tracing_subscriber::EnvFilter;

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum ColorChoice {
    /// Color when stdout supports it
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorChoice {
    fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => console::Term::stdout().features().colors_supported(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Print the help page described by a YAML or JSON document
#[derive(Debug, Parser)]
#[command(name = "send-help", version)]
struct Cli {
    /// Help document (.yaml, .yml or .json)
    file: PathBuf,

    /// Show the detailed page for this command
    command: Option<String>,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Column budget for wrapping (overrides the document)
    #[arg(long)]
    width: Option<usize>,

    /// Gap between label columns and descriptions (overrides the document)
    #[arg(long)]
    prefix: Option<usize>,

    /// Current flag value to display, as NAME=VALUE (repeatable)
    #[arg(
        long = "set",
        value_name = "NAME=VALUE",
        value_parser = parse_flag_value,
        allow_hyphen_values = true
    )]
    values: Vec<(String, String)>,
}

fn parse_flag_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => {
            Ok((name.trim_start_matches('-').to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))
}

fn main() -> Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    let mut doc = HelpDocument::from_path(&cli.file)
        .with_context(|| format!("could not load {}", cli.file.display()))?;

    doc.app.colors = cli.color.enabled();
    if let Some(command) = cli.command {
        doc.app.specific = Some(command);
    }
    if let Some(width) = cli.width {
        doc.app.width = width;
    }
    if let Some(prefix) = cli.prefix {
        doc.app.prefix = prefix;
    }
    for (name, value) in cli.values {
        doc.app.flags.insert(name, serde_json::Value::String(value));
    }

    let help = doc.render().context("could not render help")?;
    println!("{}", help);
    Ok(())
}
