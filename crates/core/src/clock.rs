// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decomposition of an elapsed magnitude into clock fields.

use crate::settings::TimeSystem;
use chrono::TimeDelta;

const NANOS_PER_MILLI: u32 = 1_000_000;
const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_DAY: u64 = 86_400;

/// Decimal time runs 1/0.864 = 125/108 times faster than real time.
const DECIMAL_SCALE_NUM: u128 = 125;
const DECIMAL_SCALE_DEN: u128 = 108;

/// Non-negative elapsed real time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Magnitude {
    secs: u64,
    nanos: u32,
}

impl Magnitude {
    /// Split a delta into `(is_negative, magnitude)`. Zero is non-negative.
    pub(crate) fn split(delta: TimeDelta) -> (bool, Self) {
        // Both parts truncate toward zero and share the delta's sign.
        let magnitude = Self {
            secs: delta.num_seconds().unsigned_abs(),
            nanos: delta.subsec_nanos().unsigned_abs(),
        };
        (delta < TimeDelta::zero(), magnitude)
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.secs == 0 && self.nanos == 0
    }

    pub(crate) fn at_least_minute(&self) -> bool {
        self.secs >= SECS_PER_MINUTE
    }

    /// Whole real milliseconds, truncated.
    fn total_millis(&self) -> u128 {
        u128::from(self.secs) * 1_000 + u128::from(self.nanos / NANOS_PER_MILLI)
    }
}

/// Clock fields of a magnitude in one time system.
///
/// `hours` is the running total and never wraps; `hours_of_day` wraps at the
/// system's day length and is only meaningful next to `days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Clock {
    pub days: u64,
    pub hours: u64,
    pub hours_of_day: u64,
    pub minutes: u64,
    pub seconds: u64,
    /// Fraction of the system's own second, in nanoseconds.
    pub subsec_nanos: u32,
}

impl Clock {
    pub(crate) fn new(magnitude: Magnitude, system: TimeSystem) -> Self {
        match system {
            TimeSystem::Standard => Self::standard(magnitude),
            TimeSystem::Decimal => Self::decimal(magnitude),
        }
    }

    fn standard(magnitude: Magnitude) -> Self {
        let secs = magnitude.secs;
        let hours = secs / SECS_PER_HOUR;
        Self {
            days: secs / SECS_PER_DAY,
            hours,
            hours_of_day: hours % 24,
            minutes: (secs / SECS_PER_MINUTE) % 60,
            seconds: secs % 60,
            subsec_nanos: magnitude.nanos,
        }
    }

    /// 10 decimal hours of 100 decimal minutes of 100 decimal seconds per day.
    ///
    /// Only whole real milliseconds are scaled, and the scaled value is
    /// truncated to whole decimal milliseconds.
    fn decimal(magnitude: Magnitude) -> Self {
        let millis = magnitude.total_millis() * DECIMAL_SCALE_NUM / DECIMAL_SCALE_DEN;
        let secs = millis / 1_000;
        let minutes = secs / 100;
        let hours = minutes / 100;
        // Remainders below 1000 always fit.
        let subsec_millis = u32::try_from(millis % 1_000).unwrap_or_default();
        Self {
            days: saturate(hours / 10),
            hours: saturate(hours),
            hours_of_day: saturate(hours % 10),
            minutes: saturate(minutes % 100),
            seconds: saturate(secs % 100),
            subsec_nanos: subsec_millis * NANOS_PER_MILLI,
        }
    }
}

fn saturate(value: u128) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
