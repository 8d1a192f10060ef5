// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles regfsm.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::pattern::SearchStrategy;

/// Raw file layout. Unknown keys are captured so they can be reported.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    matcher: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Matcher settings.
    pub matcher: MatcherConfig,
}

/// `[matcher]` section.
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Search strategy used for every match.
    pub strategy: SearchStrategy,

    /// Input count at which matching switches to the rayon thread pool.
    pub parallel_threshold: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::default(),
            parallel_threshold: Self::default_parallel_threshold(),
        }
    }
}

impl MatcherConfig {
    pub(crate) fn default_parallel_threshold() -> usize {
        1024
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known keys in the `[matcher]` section.
const KNOWN_MATCHER_KEYS: &[&str] = &["strategy", "parallel_threshold"];

/// Load and validate config from a file path, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse(&content, path)
}

fn config_error(path: &Path, message: impl Into<String>) -> Error {
    Error::Config {
        message: message.into(),
        path: Some(path.to_path_buf()),
    }
}

fn check_version(version: i64, path: &Path) -> Result<()> {
    if version != SUPPORTED_VERSION {
        return Err(config_error(
            path,
            format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
        ));
    }
    Ok(())
}

/// Parse config from string content.
///
/// Unknown keys are reported on stderr and otherwise ignored; invalid values
/// for known keys are errors.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;
    let version = flexible
        .version
        .ok_or_else(|| config_error(path, "missing required field: version"))?;
    check_version(version, path)?;

    for key in flexible.unknown.keys() {
        warn_unknown_key(path, key);
    }

    let matcher = match flexible.matcher {
        Some(toml::Value::Table(t)) => parse_matcher_config(&t, path)?,
        Some(_) => return Err(config_error(path, "`matcher` must be a table")),
        None => MatcherConfig::default(),
    };

    Ok(Config {
        version,
        matcher,
    })
}

fn parse_matcher_config(table: &toml::Table, path: &Path) -> Result<MatcherConfig> {
    for key in table.keys() {
        if !KNOWN_MATCHER_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("matcher.{}", key));
        }
    }

    let strategy: SearchStrategy = match table.get("strategy") {
        Some(value) => value.clone().try_into().map_err(|_| {
            config_error(
                path,
                format!(
                    "invalid matcher.strategy {} (expected \"recursive\" or \"worklist\")",
                    value
                ),
            )
        })?,
        None => SearchStrategy::default(),
    };

    let parallel_threshold = match table.get("parallel_threshold") {
        Some(toml::Value::Integer(n)) if *n >= 0 => *n as usize,
        Some(value) => {
            return Err(config_error(
                path,
                format!(
                    "invalid matcher.parallel_threshold {} (expected a non-negative integer)",
                    value
                ),
            ));
        }
        None => MatcherConfig::default_parallel_threshold(),
    };

    Ok(MatcherConfig {
        strategy,
        parallel_threshold,
    })
}

/// Warn about unknown configuration key.
fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "regfsm: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
