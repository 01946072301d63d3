//! pubkit CLI
//!
//! Prints the pubkit greeting.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use pubkit::{OutputFormat, PubkitConfig};
use serde::Serialize;
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// pubkit - print a greeting
#[derive(Parser, Debug)]
#[command(name = "pubkit", version)]
#[command(about = "Print the pubkit greeting", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = "PUBKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_parser = clap::value_parser!(OutputFormat))]
    format: Option<OutputFormat>,

    /// Number of times to print the greeting
    #[arg(short = 'n', long, default_value = "1")]
    count: NonZeroUsize,
}

/// JSON line written in `json` mode.
#[derive(Serialize)]
struct GreetingLine<'a> {
    message: &'a str,
}

/// Pick the filter directive: a non-empty `RUST_LOG` wins over the config file.
fn resolve_filter<'a>(env: Option<&'a str>, config: &'a PubkitConfig) -> &'a str {
    match env.map(str::trim) {
        Some(directive) if !directive.is_empty() => directive,
        _ => &config.log_filter,
    }
}

/// `--format` wins over the config file.
fn resolve_format(arg: Option<OutputFormat>, config: &PubkitConfig) -> OutputFormat {
    arg.unwrap_or(config.format)
}

fn init_logging(config: &PubkitConfig) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = resolve_filter(env.as_deref(), config);

    // Logs go to stderr; stdout carries only the greeting.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::new(directive))
        .init();
}

fn render<W: Write>(out: &mut W, format: OutputFormat, count: usize) -> Result<()> {
    let greeting = pubkit::hello();
    for _ in 0..count {
        match format {
            OutputFormat::Text => writeln!(out, "{greeting}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &GreetingLine { message: &greeting })?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = PubkitConfig::load(args.config.as_deref()).context("Failed to load config")?;
    init_logging(&config);

    let format = resolve_format(args.format, &config);
    tracing::debug!(%format, count = args.count.get(), "Printing greeting");

    let stdout = io::stdout();
    render(&mut stdout.lock(), format, args.count.get()).context("Failed to write greeting")
}
