//! Formatting specs
//!
//! Verify the rendered times for common flag combinations.

use crate::prelude::*;

#[test]
fn formats_hours_minutes_seconds() {
    cli()
        .args(&["--accuracy", "hundredths", "3661250"])
        .passes()
        .stdout_eq("1:01:01.25\n")
        .stderr_empty();
}

#[test]
fn formats_each_time_on_its_own_line() {
    cli()
        .args(&["--digits", "double-digit-seconds", "--accuracy", "tenths", "45500", "5000"])
        .passes()
        .stdout_eq("45.5\n05.0\n");
}

#[test]
fn negative_time_uses_minus_sign() {
    cli()
        .args(&["--accuracy", "hundredths", "-1250"])
        .passes()
        .stdout_eq("\u{2212}1.25\n");
}

#[test]
fn show_plus_skips_zero() {
    cli()
        .args(&["--show-plus", "1000", "0"])
        .passes()
        .stdout_eq("+1\n0\n");
}

#[test]
fn absent_time_defaults_to_dash() {
    cli().passes().stdout_eq("-\n");
    cli().args(&["none"]).passes().stdout_eq("-\n");
}

#[test]
fn absent_time_with_dashes() {
    cli()
        .args(&["--null", "dashes", "--digits", "single-digit-minutes", "--accuracy", "hundredths", "none"])
        .passes()
        .stdout_eq("-:--.--\n");
}

#[test]
fn decimal_time_of_one_day() {
    cli()
        .args(&["--system", "decimal", "86400000"])
        .passes()
        .stdout_eq("10:00:00\n");
}

#[test]
fn show_days() {
    cli()
        .args(&["--show-days", "172799000"])
        .passes()
        .stdout_eq("1d 23:59:59\n");
}

#[test]
fn drop_decimals_and_auto_precision() {
    cli()
        .args(&["--accuracy", "milliseconds", "--drop-decimals", "61500", "1500"])
        .passes()
        .stdout_eq("1:01\n1.500\n");
    cli()
        .args(&["--accuracy", "milliseconds", "--auto-precision", "61500", "1500"])
        .passes()
        .stdout_eq("1:01.5\n1.5\n");
}

#[test]
fn short_preset() {
    cli()
        .args(&["--short", "--time-format", "ten-hours", "1250", "none"])
        .passes()
        .stdout_eq("00:00:01.25\n0.00\n");
}

#[test]
fn json_output() {
    cli()
        .args(&["-o", "json", "--accuracy", "tenths", "1500", "none"])
        .passes()
        .stdout_eq(
            r#"[
  {
    "input_ms": 1500,
    "formatted": "1.5"
  },
  {
    "input_ms": null,
    "formatted": "-"
  }
]
"#,
        );
}
