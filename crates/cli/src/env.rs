// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

// --- Config file ---

/// Config file path from SPLITFMT_CONFIG, ignoring an empty value.
pub fn config_path() -> Option<PathBuf> {
    std::env::var_os("SPLITFMT_CONFIG")
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}
