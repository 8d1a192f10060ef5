// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! regfsm: a minimal regular-expression engine.
//!
//! Patterns compile into an explicit state graph which is then searched by
//! backtracking:
//!
//! ```
//! use regfsm::CompiledPattern;
//!
//! let pattern = CompiledPattern::compile("[a-c]*x+").unwrap();
//! assert!(pattern.is_match("abcxx"));
//! assert!(!pattern.is_match("abc"));
//! ```

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod env;
pub mod error;
pub mod output;
pub mod pattern;
pub mod runner;

pub use cli::{Cli, Command, ExplainArgs, MatchArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use pattern::{CompileError, CompiledPattern, SearchStrategy};
pub use runner::{MatchReport, MatchResult};
