// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field selection: which clock units appear and how they are padded.

use crate::clock::Clock;
use crate::config::FormatConfig;
use crate::settings::DigitsFormat;

/// The set of fields rendered before the fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Layout {
    /// `1d 2:03:04`
    Days,
    /// `2:03:04`, hours never wrap at a day
    Hours,
    /// `03:04`
    PaddedMinutes,
    /// `3:04`
    Minutes,
    /// `04`
    PaddedSeconds,
    /// `4`
    Seconds,
}

type Rule = fn(&Clock, &FormatConfig) -> bool;

/// Ordered from the largest unit down; the first matching rule wins, so each
/// rule may assume every rule above it failed.
const RULES: [(Layout, Rule); 6] = [
    (Layout::Days, shows_days),
    (Layout::Hours, shows_hours),
    (Layout::PaddedMinutes, pads_minutes),
    (Layout::Minutes, shows_minutes),
    (Layout::PaddedSeconds, pads_seconds),
    (Layout::Seconds, always),
];

fn shows_days(clock: &Clock, config: &FormatConfig) -> bool {
    config.show_days && clock.days > 0
}

fn shows_hours(clock: &Clock, config: &FormatConfig) -> bool {
    clock.hours > 0 || config.digits_format.forces_hours()
}

fn pads_minutes(clock: &Clock, config: &FormatConfig) -> bool {
    clock.minutes >= 10 || config.digits_format == DigitsFormat::DoubleDigitMinutes
}

fn shows_minutes(clock: &Clock, config: &FormatConfig) -> bool {
    clock.minutes > 0 || config.digits_format == DigitsFormat::SingleDigitMinutes
}

fn pads_seconds(clock: &Clock, config: &FormatConfig) -> bool {
    clock.seconds >= 10 || config.digits_format == DigitsFormat::DoubleDigitSeconds
}

fn always(_: &Clock, _: &FormatConfig) -> bool {
    true
}

impl Layout {
    pub(crate) fn select(clock: &Clock, config: &FormatConfig) -> Self {
        RULES
            .iter()
            .find(|(_, applies)| applies(clock, config))
            .map_or(Layout::Seconds, |(layout, _)| *layout)
    }

    /// Render the selected fields, without sign or fraction.
    pub(crate) fn render(self, clock: &Clock, digits_format: DigitsFormat) -> String {
        let Clock {
            days,
            hours,
            hours_of_day,
            minutes,
            seconds,
            ..
        } = *clock;
        let hour_width: usize = if digits_format.pads_hours() { 2 } else { 1 };
        match self {
            Layout::Days => format!(
                "{days}d {hours_of_day:0hour_width$}:{minutes:02}:{seconds:02}"
            ),
            Layout::Hours => format!("{hours:0hour_width$}:{minutes:02}:{seconds:02}"),
            Layout::PaddedMinutes => format!("{minutes:02}:{seconds:02}"),
            Layout::Minutes => format!("{minutes}:{seconds:02}"),
            Layout::PaddedSeconds => format!("{seconds:02}"),
            Layout::Seconds => format!("{seconds}"),
        }
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
