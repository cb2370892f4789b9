//! End-to-end checks for the color-adjust executable.
//!
//! Pins the exact stdout transcript for each input shape. The invalid-color
//! hint is part of the contract: it reports on stdout and the process still
//! exits 0, unlike clap's own usage errors.

use std::process::{Command, Output};

fn run(color: &str, intensity: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_color-adjust"))
        .args([color, intensity])
        .output()
        .expect("run binary")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn triple_input_prints_detailed_original_and_adjusted_colors() {
    let output = run("255,255,120", "-0.33");
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        [
            "Original color: rgb(255 (0xFF), 255 (0xFF), 120 (0x78))",
            "Adjusted color: rgb(170 (0xAA), 170 (0xAA), 80 (0x50))",
        ]
    );
}

#[test]
fn channel_input_prints_original_and_adjusted_channels() {
    let output = run("0x64", "0.2");
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        ["Original channel: 100 (0x64)", "Adjusted channel: 120 (0x78)"]
    );
}

#[test]
fn invalid_color_prints_the_hint_and_exits_zero() {
    let output = run("zzz", "0.5");
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert_eq!(
        stdout_lines(&output),
        ["Error: Invalid color format. Use 'R,G,B', a single value between 0 and 255, or a hex value (e.g., '0x64')."]
    );
}
