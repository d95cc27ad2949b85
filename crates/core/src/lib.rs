// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! splitfmt-core: split-timer style time formatting

mod clock;
pub mod config;
pub mod format;
mod layout;
mod precision;
pub mod settings;

pub use config::FormatConfig;
pub use format::{format, format_short, DASH, MINUS};
pub use settings::{
    Accuracy, DigitsFormat, NullFormat, ParseSettingError, TimeFormat, TimeSystem,
};
