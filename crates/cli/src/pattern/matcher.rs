// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled patterns and the backtracking search over their state graph.
//!
//! A match is an existential depth-first search from `(start, 0)`. For each
//! outgoing transition of the current node, in order:
//!
//! 1. An entry edge into a star node moves to it without consuming input
//!    (zero repetitions).
//! 2. Otherwise, if the target accepts the next character, consume it and
//!    continue from the target.
//! 3. Otherwise, at end of input, an edge into the termination node accepts.
//!
//! Plus nodes have no zero-repetition edge, so at least one character is
//! consumed before they are entered. There is no memoization: adversarial
//! patterns take exponential time.

use serde::Deserialize;

use super::CompileError;
use super::compiler;
use super::state::{Graph, StateId};

/// How the search is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// Plain recursion. Depth grows with input length and is bounded only by
    /// the native stack.
    #[default]
    Recursive,
    /// Explicit work list on the heap. Same result and visiting order, no
    /// native stack limit.
    Worklist,
}

/// A pattern compiled into a state graph, ready for matching.
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pattern: String,
    graph: Graph,
    strategy: SearchStrategy,
}

impl CompiledPattern {
    /// Compile a pattern string.
    pub fn compile(pattern: &str) -> Result<Self, CompileError> {
        Ok(Self {
            pattern: pattern.to_string(),
            graph: compiler::compile(pattern)?,
            strategy: SearchStrategy::default(),
        })
    }

    /// Use a different search strategy. Matching results are unchanged.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Check whether the whole input matches the pattern.
    pub fn is_match(&self, input: &str) -> bool {
        let input: Vec<char> = input.chars().collect();
        match self.strategy {
            SearchStrategy::Recursive => self.search(self.graph.start(), &input, 0),
            SearchStrategy::Worklist => self.search_worklist(&input),
        }
    }

    fn search(&self, current: StateId, input: &[char], pos: usize) -> bool {
        for &next in self.graph.transitions(current) {
            let state = self.graph.state(next);
            if state.is_star() && next != current {
                if self.search(next, input, pos) {
                    return true;
                }
            } else if pos < input.len() && state.accepts(input[pos]) {
                if self.search(next, input, pos + 1) {
                    return true;
                }
            } else if pos >= input.len() && state.is_termination() {
                return true;
            }
        }
        false
    }

    /// Same search as [`Self::search`], with the call stack replaced by a
    /// vector of suspended frames.
    fn search_worklist(&self, input: &[char]) -> bool {
        // (node, input position, index of the next transition to try)
        let mut frames: Vec<(StateId, usize, usize)> = vec![(self.graph.start(), 0, 0)];

        while let Some(frame) = frames.last_mut() {
            let (current, pos, edge) = *frame;
            let Some(&next) = self.graph.transitions(current).get(edge) else {
                frames.pop();
                continue;
            };
            frame.2 += 1;

            let state = self.graph.state(next);
            if state.is_star() && next != current {
                frames.push((next, pos, 0));
            } else if pos < input.len() && state.accepts(input[pos]) {
                frames.push((next, pos + 1, 0));
            } else if pos >= input.len() && state.is_termination() {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
