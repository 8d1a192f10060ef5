// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variables read by regfsm.

/// Environment variable names.
pub mod names {
    /// Disables color output (any value).
    pub const NO_COLOR: &str = "NO_COLOR";
    /// Forces color output (any value).
    pub const COLOR: &str = "COLOR";
    /// Indicates Claude Code agent environment.
    pub const CLAUDE_CODE: &str = "CLAUDE_CODE";
    /// Indicates Codex agent environment.
    pub const CODEX: &str = "CODEX";
    /// Indicates Cursor agent environment.
    pub const CURSOR: &str = "CURSOR";
    /// Indicates CI environment.
    pub const CI: &str = "CI";
    /// Tracing log filter.
    pub const REGFSM_LOG: &str = "REGFSM_LOG";
    /// Config file location.
    pub const REGFSM_CONFIG: &str = "REGFSM_CONFIG";
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
