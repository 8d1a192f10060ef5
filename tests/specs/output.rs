//! Behavioral specs for output formats and color.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > -o json produces a report with counts and per-input results
#[test]
fn match_json_output() {
    let dir = isolated_dir();
    let output = regfsm_cmd()
        .args(["match", "-o", "json", "[0-9]+", "42", "x"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["pattern"], "[0-9]+");
    assert_eq!(json["matched"], 1);
    assert_eq!(json["rejected"], 1);
    assert_eq!(
        json["results"],
        serde_json::json!([
            { "input": "42", "matched": true },
            { "input": "x", "matched": false },
        ])
    );
}

/// > NO_COLOR disables color output
#[test]
fn no_color_env_disables_color() {
    let dir = isolated_dir();
    let output = regfsm_cmd()
        .args(["match", "a", "a"])
        .current_dir(dir.path())
        .env("NO_COLOR", "1")
        .output()
        .unwrap();
    assert!(!String::from_utf8_lossy(&output.stdout).contains("\x1b["));
}

/// > --color forces color even when stdout is not a terminal
#[test]
fn color_flag_forces_color() {
    let dir = isolated_dir();
    let output = regfsm_cmd()
        .args(["match", "--color", "a", "a"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(String::from_utf8_lossy(&output.stdout).contains("\x1b["));
}

/// > COLOR forces color output
#[test]
fn color_env_forces_color() {
    let dir = isolated_dir();
    let output = regfsm_cmd()
        .args(["match", "a", "b"])
        .current_dir(dir.path())
        .env("COLOR", "1")
        .output()
        .unwrap();
    assert!(String::from_utf8_lossy(&output.stdout).contains("\x1b["));
}
