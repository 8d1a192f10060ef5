// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the current directory up to the git root looking for regfsm.toml.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Config file name looked up during discovery.
pub const CONFIG_FILE: &str = "regfsm.toml";

/// Nearest `regfsm.toml` in `start_dir` or an ancestor.
///
/// The directory holding `.git` is the last one searched. Only regular files
/// count; a directory named `regfsm.toml` is skipped.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Pick the config file for this run.
///
/// An explicit path (`-C`/`--config` or `REGFSM_CONFIG`) must name an
/// existing file. Without one, discovery runs from `cwd`; `None` means
/// built-in defaults.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    let Some(path) = explicit else {
        return Ok(find_config(cwd));
    };
    if !path.is_file() {
        return Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(Some(path.to_path_buf()))
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
