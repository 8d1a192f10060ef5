// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compilation and matching.
//!
//! Supported syntax:
//! - literal ASCII characters
//! - `.` for any one character
//! - `[...]` groups of characters and inclusive ranges (`[a-z0-9_]`)
//! - `*` (zero or more) and `+` (one or more) after an atom
//!
//! A pattern always matches the whole input.

pub mod charset;
pub mod compiler;
pub mod matcher;
pub mod state;

pub use charset::CharSet;
pub use compiler::{CompileError, compile};
pub use matcher::{CompiledPattern, SearchStrategy};
pub use state::{Graph, Node, State, StateId};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
