//! Behavioral specs for regfsm.toml handling.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > A discovered config selects the search strategy
#[test]
fn discovered_config_sets_strategy() {
    let dir = dir_with_config("version = 1\n[matcher]\nstrategy = \"worklist\"\n");
    regfsm_cmd()
        .args(["match", "a*", "aaa"])
        .current_dir(dir.path())
        .env("REGFSM_LOG", "debug")
        .assert()
        .success()
        .stderr(predicates::str::contains("Worklist"));
}

/// > --strategy overrides the config
#[test]
fn flag_overrides_config_strategy() {
    let dir = dir_with_config("version = 1\n[matcher]\nstrategy = \"worklist\"\n");
    regfsm_cmd()
        .args(["match", "--strategy", "recursive", "a*", "aaa"])
        .current_dir(dir.path())
        .env("REGFSM_LOG", "debug")
        .assert()
        .success()
        .stderr(predicates::str::contains("Recursive"));
}

/// > Unknown keys are warnings
#[test]
fn unknown_config_key_warns() {
    let dir = dir_with_config("version = 1\nunknown_key = true\n");
    regfsm_cmd()
        .args(["match", "a", "a"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("unrecognized field `unknown_key`"));
}

/// > Unsupported version is a config error
#[test]
fn unsupported_version_exits_two() {
    let dir = dir_with_config("version = 2\n");
    regfsm_cmd()
        .args(["match", "a", "a"])
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 2"));
}

/// > -C points at an explicit config file
#[test]
fn explicit_config_flag() {
    let dir = isolated_dir();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "version = 1\n[matcher]\nstrategy = \"worklist\"\n").unwrap();

    regfsm_cmd()
        .args(["-C", path.to_str().unwrap(), "match", "a", "a"])
        .current_dir(dir.path())
        .env("REGFSM_LOG", "debug")
        .assert()
        .success()
        .stderr(predicates::str::contains("Worklist"));
}

/// > REGFSM_CONFIG sets the config file location
#[test]
fn env_config_sets_path() {
    let dir = isolated_dir();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "version = 2\n").unwrap();

    regfsm_cmd()
        .args(["match", "a", "a"])
        .current_dir(dir.path())
        .env("REGFSM_CONFIG", path.to_str().unwrap())
        .assert()
        .code(2);
}

/// > A missing explicit config is an error
#[test]
fn missing_explicit_config_exits_two() {
    let dir = isolated_dir();
    regfsm_cmd()
        .args(["-C", "missing.toml", "match", "a", "a"])
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config file not found"));
}
