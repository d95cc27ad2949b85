// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Closed setting enums consumed by [`FormatConfig`](crate::FormatConfig).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A setting name that does not match any variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseSettingError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// Define a closed setting enum.
///
/// Generates the enum with serde `snake_case` names, an `ALL` table, `as_str()`
/// (kebab-case label), `Display`, and a `FromStr` that accepts the label in
/// kebab-case or snake_case, ignoring ASCII case.
macro_rules! define_setting {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $label:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseSettingError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| ParseSettingError {
                        kind: $kind,
                        value: s.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

define_setting! {
    /// Smallest time unit rendered as a fraction of a second.
    pub enum Accuracy as "accuracy" {
        #[default]
        Seconds => "seconds",
        Tenths => "tenths",
        Hundredths => "hundredths",
        Milliseconds => "milliseconds",
    }
}

impl Accuracy {
    /// Number of fractional digits this accuracy renders.
    pub fn digits(self) -> usize {
        match self {
            Accuracy::Seconds => 0,
            Accuracy::Tenths => 1,
            Accuracy::Hundredths => 2,
            Accuracy::Milliseconds => 3,
        }
    }
}

define_setting! {
    /// Minimum field width, or the smallest unit that is always shown.
    ///
    /// A digits format only ever widens the output: it never hides a larger
    /// non-zero unit.
    pub enum DigitsFormat as "digits format" {
        /// `1.23`
        #[default]
        SingleDigitSeconds => "single-digit-seconds",
        /// `01.23`
        DoubleDigitSeconds => "double-digit-seconds",
        /// `0:01.23`
        SingleDigitMinutes => "single-digit-minutes",
        /// `00:01.23`
        DoubleDigitMinutes => "double-digit-minutes",
        /// `0:00:01.23`
        SingleDigitHours => "single-digit-hours",
        /// `00:00:01.23`
        DoubleDigitHours => "double-digit-hours",
    }
}

impl DigitsFormat {
    /// Whether the hour field is always rendered.
    pub fn forces_hours(self) -> bool {
        matches!(
            self,
            DigitsFormat::SingleDigitHours | DigitsFormat::DoubleDigitHours
        )
    }

    /// Whether the hour field is zero-padded to two digits.
    pub fn pads_hours(self) -> bool {
        self == DigitsFormat::DoubleDigitHours
    }
}

define_setting! {
    /// Numbering system used to subdivide the day.
    pub enum TimeSystem as "time system" {
        /// 24 hours of 60 minutes of 60 seconds.
        #[default]
        Standard => "standard",
        /// 10 hours of 100 minutes of 100 seconds.
        Decimal => "decimal",
    }
}

define_setting! {
    /// How an absent time is rendered.
    pub enum NullFormat as "null format" {
        /// A single dash.
        #[default]
        Dash => "dash",
        /// The zero rendering with every `0` replaced by a dash.
        Dashes => "dashes",
        /// The zero rendering.
        ZeroValue => "zero-value",
        /// `0`, `0.0`, `0.00` or `0.000` depending on accuracy.
        ZeroWithAccuracy => "zero-with-accuracy",
        /// Always `0.00`.
        ZeroDotZeroZero => "zero-dot-zero-zero",
    }
}

define_setting! {
    /// Legacy layout setting, superseded by [`DigitsFormat`].
    ///
    /// Kept so older settings can still be read. Convert it once with
    /// `DigitsFormat::from` and keep the result.
    pub enum TimeFormat as "time format" {
        #[default]
        Seconds => "seconds",
        Minutes => "minutes",
        Hours => "hours",
        TenHours => "ten-hours",
    }
}

impl From<TimeFormat> for DigitsFormat {
    fn from(format: TimeFormat) -> Self {
        match format {
            TimeFormat::Seconds => DigitsFormat::SingleDigitSeconds,
            TimeFormat::Minutes => DigitsFormat::SingleDigitMinutes,
            TimeFormat::Hours => DigitsFormat::SingleDigitHours,
            TimeFormat::TenHours => DigitsFormat::DoubleDigitHours,
        }
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
