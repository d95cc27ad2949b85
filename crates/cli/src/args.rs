// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Formatter flags and time arguments.

use chrono::TimeDelta;
use clap::Args;
use splitfmt_core::{
    Accuracy, DigitsFormat, FormatConfig, NullFormat, TimeFormat, TimeSystem,
};
use std::str::FromStr;
use thiserror::Error;

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;

/// Formatter settings given on the command line.
///
/// Each flag overrides the matching field of the base config; switches can
/// only turn a setting on.
#[derive(Args, Debug, Default)]
pub struct FormatArgs {
    /// Smallest unit shown as a fraction [seconds, tenths, hundredths, milliseconds]
    #[arg(long, value_name = "ACCURACY")]
    pub accuracy: Option<Accuracy>,

    /// Minimum field layout, e.g. double-digit-minutes
    #[arg(long = "digits", value_name = "FORMAT", conflicts_with = "time_format")]
    pub digits_format: Option<DigitsFormat>,

    /// Legacy layout [seconds, minutes, hours, ten-hours]
    #[arg(long, value_name = "FORMAT")]
    pub time_format: Option<TimeFormat>,

    /// Numbering system [standard, decimal]
    #[arg(long = "system", value_name = "SYSTEM")]
    pub time_system: Option<TimeSystem>,

    /// Rendering of an absent time, e.g. zero-with-accuracy
    #[arg(long = "null", value_name = "FORMAT")]
    pub null_format: Option<NullFormat>,

    /// Show a day field instead of rolling hours past a day
    #[arg(long)]
    pub show_days: bool,

    /// Prefix positive times with `+`
    #[arg(long)]
    pub show_plus: bool,

    /// Drop the fraction from one minute on
    #[arg(long)]
    pub drop_decimals: bool,

    /// Drop trailing zero fraction digits
    #[arg(long = "auto-precision")]
    pub automatic_precision: bool,
}

impl FormatArgs {
    /// Digits format from `--digits`, or converted from `--time-format`.
    pub fn digits(&self) -> Option<DigitsFormat> {
        self.digits_format
            .or_else(|| self.time_format.map(DigitsFormat::from))
    }

    pub fn apply(&self, base: FormatConfig) -> FormatConfig {
        FormatConfig {
            accuracy: self.accuracy.unwrap_or(base.accuracy),
            digits_format: self.digits().unwrap_or(base.digits_format),
            time_system: self.time_system.unwrap_or(base.time_system),
            null_format: self.null_format.unwrap_or(base.null_format),
            show_days: self.show_days || base.show_days,
            show_plus: self.show_plus || base.show_plus,
            drop_decimals: self.drop_decimals || base.drop_decimals,
            automatic_precision: self.automatic_precision || base.automatic_precision,
        }
    }

    /// The short preset, with only the layout and numbering system taken
    /// from the flags.
    pub fn short(&self) -> FormatConfig {
        FormatConfig::short(self.digits().unwrap_or_default())
            .with_time_system(self.time_system.unwrap_or_default())
    }
}

/// Errors from parsing a time argument
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeArgError {
    #[error("invalid time '{0}': expected whole milliseconds or 'none'")]
    Invalid(String),
    #[error("time out of range: {0} ms")]
    OutOfRange(i64),
}

/// A positional time: whole milliseconds, or `none` / `-` for no time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeArg {
    millis: Option<i64>,
    delta: Option<TimeDelta>,
}

impl TimeArg {
    pub const NONE: TimeArg = TimeArg {
        millis: None,
        delta: None,
    };

    pub fn millis(&self) -> Option<i64> {
        self.millis
    }

    pub fn delta(&self) -> Option<TimeDelta> {
        self.delta
    }
}

impl FromStr for TimeArg {
    type Err = TimeArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "-" || s.eq_ignore_ascii_case("none") {
            return Ok(Self::NONE);
        }
        let millis: i64 = s
            .parse()
            .map_err(|_| TimeArgError::Invalid(s.to_string()))?;
        let delta =
            TimeDelta::try_milliseconds(millis).ok_or(TimeArgError::OutOfRange(millis))?;
        Ok(Self {
            millis: Some(millis),
            delta: Some(delta),
        })
    }
}
