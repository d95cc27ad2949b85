// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One formatted time, paired with the input it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendered {
    pub input_ms: Option<i64>,
    pub formatted: String,
}

/// Render results as newline-terminated text or a pretty JSON array.
pub fn render(results: &[Rendered], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(results
            .iter()
            .map(|r| format!("{}\n", r.formatted))
            .collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(results)?)),
    }
}
