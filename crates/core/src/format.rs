// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The time formatting engine.

use crate::clock::{Clock, Magnitude};
use crate::config::FormatConfig;
use crate::layout::Layout;
use crate::precision;
use crate::settings::{Accuracy, DigitsFormat, NullFormat, TimeSystem};
use chrono::TimeDelta;

/// Placeholder glyph for absent times.
pub const DASH: &str = "-";

/// Sign glyph for negative times (U+2212 MINUS SIGN).
pub const MINUS: &str = "\u{2212}";

/// Render `time` under `config`.
///
/// Total over every input: `None` is handled by [`NullFormat`], and every
/// configuration combination yields a string.
///
/// ```
/// use chrono::TimeDelta;
/// use splitfmt_core::{format, Accuracy, FormatConfig};
///
/// let config = FormatConfig::default().with_accuracy(Accuracy::Hundredths);
/// let time = TimeDelta::milliseconds(3_661_250);
/// assert_eq!(format(Some(time), &config), "1:01:01.25");
/// ```
pub fn format(time: Option<TimeDelta>, config: &FormatConfig) -> String {
    let time = match (time, config.null_format) {
        (Some(time), _) => time,
        (None, NullFormat::Dash) => return DASH.to_string(),
        (None, NullFormat::ZeroWithAccuracy) => return zero_with_accuracy(config).to_string(),
        (None, NullFormat::ZeroDotZeroZero) => return "0.00".to_string(),
        (None, NullFormat::ZeroValue) => TimeDelta::zero(),
        // Literal substitution: a `10` in the zero rendering becomes `1-`.
        (None, NullFormat::Dashes) => {
            return format_present(TimeDelta::zero(), config).replace('0', DASH);
        }
    };
    format_present(time, config)
}

/// Format with the [`FormatConfig::short`] preset.
pub fn format_short(
    time: Option<TimeDelta>,
    digits_format: impl Into<DigitsFormat>,
    time_system: TimeSystem,
) -> String {
    format(
        time,
        &FormatConfig::short(digits_format).with_time_system(time_system),
    )
}

fn format_present(time: TimeDelta, config: &FormatConfig) -> String {
    let (negative, magnitude) = Magnitude::split(time);
    let sign = if negative {
        MINUS
    } else if config.show_plus && !magnitude.is_zero() {
        "+"
    } else {
        ""
    };

    let clock = Clock::new(magnitude, config.time_system);
    let fields = Layout::select(&clock, config).render(&clock, config.digits_format);
    let precision = precision::effective(config, &magnitude, &clock);
    let fraction = precision::fraction(clock.subsec_nanos, precision);

    format!("{sign}{fields}{fraction}")
}

fn zero_with_accuracy(config: &FormatConfig) -> &'static str {
    if config.automatic_precision {
        return "0";
    }
    match config.accuracy {
        Accuracy::Seconds => "0",
        Accuracy::Tenths => "0.0",
        Accuracy::Hundredths => "0.00",
        Accuracy::Milliseconds => "0.000",
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
