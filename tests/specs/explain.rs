//! Behavioral specs for `regfsm explain`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Text output lists one node per line
#[test]
fn explain_text() {
    regfsm_cmd()
        .args(["explain", "a+."])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout("0: start -> 1\n1: plus(literal 'a') -> 1, 2\n2: dot -> 3\n3: end\n");
}

/// > JSON output describes the graph
#[test]
fn explain_json() {
    let output = regfsm_cmd()
        .args(["explain", "-o", "json", "[a-c]*"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["pattern"], "[a-c]*");
    assert_eq!(json["start"], 0);
    assert_eq!(json["end"], 2);
    assert_eq!(json["nodes"][1]["state"], "star(group [a-c])");
    assert_eq!(json["nodes"][1]["transitions"], serde_json::json!([1, 2]));
}

/// > Empty pattern is start followed by end
#[test]
fn explain_empty_pattern() {
    regfsm_cmd()
        .args(["explain", ""])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout("0: start -> 1\n1: end\n");
}

/// > Explain reports compile errors
#[test]
fn explain_invalid_pattern() {
    regfsm_cmd()
        .args(["explain", "[z-a]"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("regfsm: pattern error"));
}
