//! Behavioral specs for `regfsm match`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Exit code 0 when every input matches
#[test]
fn all_inputs_match() {
    let dir = isolated_dir();
    regfsm_cmd()
        .args(["match", "--no-color", "a*b", "b", "aab"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("MATCH    b\nMATCH    aab\n");
}

/// > Exit code 1 when any input is rejected
#[test]
fn rejected_input_exits_one() {
    let dir = isolated_dir();
    regfsm_cmd()
        .args(["match", "--no-color", "a+", "a", ""])
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout("MATCH    a\nNO MATCH \n");
}

/// > Inputs are read from stdin, one per line, when none are given
#[test]
fn reads_inputs_from_stdin() {
    let dir = isolated_dir();
    assert_cmd::Command::from_std(regfsm_cmd())
        .args(["match", "--no-color", "[asdaf-px-z]*a"])
        .current_dir(dir.path())
        .write_stdin("a\nyyyyya\nbbb\n")
        .assert()
        .code(1)
        .stdout("MATCH    a\nMATCH    yyyyya\nNO MATCH bbb\n");
}

/// > Empty stdin is an empty batch and succeeds
#[test]
fn empty_stdin_succeeds() {
    let dir = isolated_dir();
    assert_cmd::Command::from_std(regfsm_cmd())
        .args(["match", "a"])
        .current_dir(dir.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}

/// > Stdin that is not UTF-8 is a usage error, not an internal one
#[test]
fn invalid_utf8_stdin_exits_2() {
    let dir = isolated_dir();
    assert_cmd::Command::from_std(regfsm_cmd())
        .args(["match", "a"])
        .current_dir(dir.path())
        .write_stdin(vec![b'a', b'\n', 0xff, 0xfe, b'\n'])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("stdin is not valid UTF-8"));
}

/// > --quiet prints nothing and reports through the exit code
#[test]
fn quiet_prints_nothing() {
    let dir = isolated_dir();
    regfsm_cmd()
        .args(["match", "-q", "a", "b"])
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout("");
}

/// > Consecutive quantifiers are not composed
#[test]
fn second_star_is_literal() {
    let dir = isolated_dir();
    regfsm_cmd()
        .args(["match", "-q", "a**", "a*"])
        .current_dir(dir.path())
        .assert()
        .success();
    regfsm_cmd()
        .args(["match", "-q", "a**", "aa"])
        .current_dir(dir.path())
        .assert()
        .code(1);
}

/// > Both strategies give the same answers
#[test]
fn worklist_strategy_flag() {
    let dir = isolated_dir();
    regfsm_cmd()
        .args(["match", "--no-color", "--strategy", "worklist", "x.+y", "xaay", "xy"])
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout("MATCH    xaay\nNO MATCH xy\n");
}

/// > Compile errors exit 2 and name the problem
#[test]
fn unterminated_group_exits_two() {
    let dir = isolated_dir();
    regfsm_cmd()
        .args(["match", "[abc", "a"])
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unterminated group"));
}

#[test]
fn malformed_range_exits_two() {
    let dir = isolated_dir();
    regfsm_cmd()
        .args(["match", "[a-a-]", "a"])
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("malformed range"));
}

#[test]
fn inverted_range_exits_two() {
    let dir = isolated_dir();
    regfsm_cmd()
        .args(["match", "[z-a]", "a"])
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid range bounds"));
}

#[test]
fn non_ascii_pattern_exits_two() {
    let dir = isolated_dir();
    regfsm_cmd()
        .args(["match", "caf\u{e9}", "cafe"])
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported character"));
}

/// > Patterns starting with a dash are passed after `--`
#[test]
fn dash_pattern_after_separator() {
    let dir = isolated_dir();
    regfsm_cmd()
        .args(["match", "-q", "--", "-+", "---"])
        .current_dir(dir.path())
        .assert()
        .success();
}
