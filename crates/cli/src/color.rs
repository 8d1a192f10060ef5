// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--no-color` / `--color` flags
//! 2. NO_COLOR env var → no color
//! 3. COLOR env var → use color
//! 4. default:
//!    - If not stdout.is_tty() → no color
//!    - If CI or an agent environment variable is set → no color
//!    - Else → auto

use std::io::IsTerminal;

use termcolor::ColorChoice;

use crate::env::names;

/// Resolve color choice from command-line flags, then the environment.
pub fn resolve(force_color: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force_color {
        ColorChoice::Always
    } else {
        resolve_color()
    }
}

/// Resolve color choice from environment variables.
///
/// Priority: NO_COLOR > COLOR > auto-detect
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color.
pub fn resolve_color() -> ColorChoice {
    if std::env::var_os(names::NO_COLOR).is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os(names::COLOR).is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() {
        return ColorChoice::Never;
    }
    if is_agent_environment() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

fn is_agent_environment() -> bool {
    [names::CLAUDE_CODE, names::CODEX, names::CURSOR, names::CI]
        .iter()
        .any(|name| std::env::var_os(name).is_some())
}

/// Color scheme for match output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Green "MATCH" indicator.
    pub fn matched() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Red "NO MATCH" indicator.
    pub fn rejected() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Cyan state id in graph listings.
    pub fn state_id() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Bold state description.
    pub fn state() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
