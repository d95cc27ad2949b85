// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Formatter configuration and presets.

use crate::settings::{Accuracy, DigitsFormat, NullFormat, TimeSystem};
use serde::{Deserialize, Serialize};

/// Display rules for a single [`format`](crate::format) call.
///
/// Plain `Copy` data: build one, pass it by reference, and it is never
/// modified while formatting. Deserializes over the defaults, so a settings
/// table only needs the fields it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub accuracy: Accuracy,
    pub digits_format: DigitsFormat,
    pub time_system: TimeSystem,
    pub null_format: NullFormat,
    /// Render `1d 23:59:10` instead of `47:59:10`.
    pub show_days: bool,
    /// Prefix positive, non-zero times with `+`.
    pub show_plus: bool,
    /// Drop the fraction once the magnitude reaches one minute.
    pub drop_decimals: bool,
    /// Drop trailing zero fraction digits, up to `accuracy`.
    pub automatic_precision: bool,
}

impl FormatConfig {
    /// Preset for compact split times: always two fraction digits, and
    /// `0.00` for an absent time.
    pub fn short(digits_format: impl Into<DigitsFormat>) -> Self {
        Self {
            accuracy: Accuracy::Hundredths,
            null_format: NullFormat::ZeroWithAccuracy,
            digits_format: digits_format.into(),
            ..Self::default()
        }
    }

    pub fn with_accuracy(mut self, accuracy: Accuracy) -> Self {
        self.accuracy = accuracy;
        self
    }

    pub fn with_digits_format(mut self, digits_format: impl Into<DigitsFormat>) -> Self {
        self.digits_format = digits_format.into();
        self
    }

    pub fn with_time_system(mut self, time_system: TimeSystem) -> Self {
        self.time_system = time_system;
        self
    }

    pub fn with_null_format(mut self, null_format: NullFormat) -> Self {
        self.null_format = null_format;
        self
    }

    pub fn with_show_days(mut self, show_days: bool) -> Self {
        self.show_days = show_days;
        self
    }

    pub fn with_show_plus(mut self, show_plus: bool) -> Self {
        self.show_plus = show_plus;
        self
    }

    pub fn with_drop_decimals(mut self, drop_decimals: bool) -> Self {
        self.drop_decimals = drop_decimals;
        self
    }

    pub fn with_automatic_precision(mut self, automatic_precision: bool) -> Self {
        self.automatic_precision = automatic_precision;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
