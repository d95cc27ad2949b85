// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fractional digit selection and rendering.

use crate::clock::{Clock, Magnitude};
use crate::config::FormatConfig;
use crate::settings::Accuracy;

const NANOS_PER_TENTH: u32 = 100_000_000;
const NANOS_PER_HUNDREDTH: u32 = 10_000_000;

/// Pick the precision actually rendered for this value.
///
/// Automatic precision wins over `drop_decimals`.
pub(crate) fn effective(config: &FormatConfig, magnitude: &Magnitude, clock: &Clock) -> Accuracy {
    if config.automatic_precision {
        automatic(config.accuracy, clock.subsec_nanos)
    } else if config.drop_decimals && magnitude.at_least_minute() {
        Accuracy::Seconds
    } else {
        config.accuracy
    }
}

/// Fewest digits that represent `subsec_nanos` exactly, capped at `cap`.
fn automatic(cap: Accuracy, subsec_nanos: u32) -> Accuracy {
    if cap == Accuracy::Seconds || subsec_nanos == 0 {
        Accuracy::Seconds
    } else if cap == Accuracy::Tenths || subsec_nanos % NANOS_PER_TENTH == 0 {
        Accuracy::Tenths
    } else if cap == Accuracy::Hundredths || subsec_nanos % NANOS_PER_HUNDREDTH == 0 {
        Accuracy::Hundredths
    } else {
        Accuracy::Milliseconds
    }
}

/// Render `.d`, `.dd` or `.ddd`, truncating extra digits; empty for seconds.
pub(crate) fn fraction(subsec_nanos: u32, precision: Accuracy) -> String {
    let digits = precision.digits();
    if digits == 0 {
        return String::new();
    }
    let divisor = 10u32.pow(9 - digits as u32);
    format!(".{:0width$}", subsec_nanos / divisor, width = digits)
}

#[cfg(test)]
#[path = "precision_tests.rs"]
mod tests;
