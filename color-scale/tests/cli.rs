//! End-to-end checks for the color-scale executable.
//!
//! The binary emits the soft-scale rules under the `airport` class on
//! stdout; diagnostics stay on stderr and are silent at the default filter.

use std::process::{Command, Output};

use palette::scale::ScaleConfig;

fn run() -> Output {
    Command::new(env!("CARGO_BIN_EXE_color-scale"))
        .env_remove("RUST_LOG")
        .output()
        .expect("run binary")
}

#[test]
fn stdout_carries_exactly_the_airport_scale_rules() {
    let entries = ScaleConfig::soft()
        .expect("config")
        .generate()
        .expect("generate");
    let expected: Vec<String> = entries
        .iter()
        .map(|entry| entry.css_rule("airport"))
        .collect();

    let output = run();
    assert!(output.status.success());
    let lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect();
    assert_eq!(lines, expected);
}

#[test]
fn default_filter_keeps_stderr_quiet() {
    let output = run();
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}
