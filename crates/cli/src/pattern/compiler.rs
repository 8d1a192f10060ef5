// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compiler: turns a pattern string into a state graph.

use super::state::{Graph, GraphBuilder, State};
use super::CharSet;

/// Error during pattern compilation.
///
/// Positions are byte offsets into the pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("unterminated group: `[` at position {position} is never closed")]
    UnterminatedGroup { position: usize },

    #[error("malformed range in group [{group}] at position {position}")]
    MalformedRange { group: String, position: usize },

    #[error("invalid range bounds in group [{group}]: {start:?} is greater than {end:?}")]
    InvalidRangeBounds {
        group: String,
        start: char,
        end: char,
    },

    #[error("unsupported character {character:?} at position {position}")]
    UnsupportedCharacter { character: char, position: usize },
}

/// Compile a pattern into a state graph.
///
/// Atoms are read left to right. A single `*` or `+` directly after an atom
/// wraps it in a repeat node; any further quantifier character starts a new
/// literal atom, so `a**` is `a*` followed by a literal `*`.
pub fn compile(pattern: &str) -> Result<Graph, CompileError> {
    if let Some((position, character)) = pattern.char_indices().find(|(_, c)| !c.is_ascii()) {
        return Err(CompileError::UnsupportedCharacter {
            character,
            position,
        });
    }

    // ASCII only from here on, so byte offsets and char offsets coincide.
    let bytes = pattern.as_bytes();
    let mut builder = GraphBuilder::new();
    let mut current = builder.start();
    let mut cursor = 0;

    while cursor < bytes.len() {
        let (atom, next) = read_atom(pattern, cursor)?;

        let (state, next) = match bytes.get(next) {
            Some(b'*') => (State::Star(Box::new(atom)), next + 1),
            Some(b'+') => (State::Plus(Box::new(atom)), next + 1),
            _ => (atom, next),
        };
        tracing::trace!("compiled {} at {}", state, cursor);

        let id = builder.push(state);
        builder.connect(current, id);
        current = id;
        cursor = next;
    }

    let graph = builder.finish(current);
    tracing::debug!("compiled pattern {:?} into {} states", pattern, graph.len());
    Ok(graph)
}

/// Read one atom starting at `cursor`, returning it with the position just
/// past it.
fn read_atom(pattern: &str, cursor: usize) -> Result<(State, usize), CompileError> {
    match pattern.as_bytes()[cursor] {
        b'.' => Ok((State::Dot, cursor + 1)),
        b'[' => {
            let body_start = cursor + 1;
            let close = pattern[body_start..]
                .find(']')
                .map(|offset| body_start + offset)
                .ok_or(CompileError::UnterminatedGroup { position: cursor })?;
            let set = CharSet::parse_group(&pattern[body_start..close], body_start)?;
            Ok((State::Group(set), close + 1))
        }
        b => Ok((State::Literal(char::from(b)), cursor + 1)),
    }
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
