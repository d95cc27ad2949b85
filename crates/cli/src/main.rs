// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! splitfmt - format split times from the command line

mod args;
mod config;
mod env;
mod output;

use anyhow::Result;
use clap::Parser;
use splitfmt_core::FormatConfig;
use std::path::PathBuf;

use crate::args::{FormatArgs, TimeArg};
use crate::config::FileConfig;
use crate::output::{OutputFormat, Rendered};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

#[derive(Parser, Debug)]
#[command(
    name = "splitfmt",
    version,
    about = "Format split times the way a split timer displays them"
)]
struct Cli {
    /// Times in whole milliseconds, or `none` for no time
    #[arg(value_name = "TIME", allow_negative_numbers = true)]
    times: Vec<TimeArg>,

    #[command(flatten)]
    format: FormatArgs,

    /// Compact split preset: hundredths, and `0.00` for no time
    #[arg(
        long,
        conflicts_with_all = [
            "accuracy",
            "null_format",
            "show_days",
            "show_plus",
            "drop_decimals",
            "automatic_precision",
            "config",
        ]
    )]
    short: bool,

    /// TOML settings file with a [formatter] table (default: $SPLITFMT_CONFIG)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    output: OutputFormat,
}

fn main() {
    init_logging();
    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped; otherwise the full chain is rendered.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    tracing::debug!(?config, "resolved formatter config");

    let results = format_all(&cli.times, &config);
    print!("{}", output::render(&results, cli.output)?);
    Ok(())
}

/// Preset, or the settings file (flag, then environment) overlaid with flags.
fn resolve_config(cli: &Cli) -> Result<FormatConfig> {
    if cli.short {
        return Ok(cli.format.short());
    }
    let base = match cli.config.clone().or_else(env::config_path) {
        Some(path) => FileConfig::load(&path)?.formatter,
        None => FormatConfig::default(),
    };
    Ok(cli.format.apply(base))
}

/// Format every time; no times at all formats a single absent time.
fn format_all(times: &[TimeArg], config: &FormatConfig) -> Vec<Rendered> {
    const NO_TIME: &[TimeArg] = &[TimeArg::NONE];
    let times = if times.is_empty() { NO_TIME } else { times };
    times
        .iter()
        .map(|time| Rendered {
            input_ms: time.millis(),
            formatted: splitfmt_core::format(time.delta(), config),
        })
        .collect()
}
