//! Settings file specs
//!
//! Verify loading of the [formatter] table and flag precedence.

use crate::prelude::*;

fn settings_file(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("splitfmt.toml");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn config_flag_loads_formatter_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = settings_file(
        &dir,
        "[formatter]\naccuracy = \"hundredths\"\ndigits_format = \"double_digit_minutes\"\n",
    );

    cli()
        .args(&["--config", path.to_str().unwrap(), "1250"])
        .passes()
        .stdout_eq("00:01.25\n");
}

#[test]
fn environment_names_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = settings_file(&dir, "[formatter]\nnull_format = \"zero_dot_zero_zero\"\n");

    cli()
        .env("SPLITFMT_CONFIG", &path)
        .args(&["none"])
        .passes()
        .stdout_eq("0.00\n");
}

#[test]
fn flags_override_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = settings_file(&dir, "[formatter]\naccuracy = \"hundredths\"\n");

    cli()
        .args(&["--config", path.to_str().unwrap(), "--accuracy", "tenths", "1250"])
        .passes()
        .stdout_eq("1.2\n");
}

#[test]
fn debug_logging_goes_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let path = settings_file(&dir, "[formatter]\nshow_plus = true\n");

    let run = cli()
        .env("RUST_LOG", "debug")
        .args(&["--config", path.to_str().unwrap(), "1000"])
        .passes()
        .stdout_eq("+1\n")
        .stderr_has("resolved formatter config");
    assert!(!run.stdout().contains("DEBUG"));
}
