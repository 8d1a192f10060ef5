// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Matches a batch of inputs against one compiled pattern.
//!
//! Large batches are split across the rayon thread pool; the compiled
//! pattern is shared read-only between workers. Results keep input order.
//! Worker threads have small stacks, so the parallel path always searches
//! with [`SearchStrategy::Worklist`].

use rayon::prelude::*;
use serde::Serialize;

use crate::pattern::{CompiledPattern, SearchStrategy};

/// Outcome for a single input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub input: String,
    pub matched: bool,
}

/// Outcome for a whole batch.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub pattern: String,
    pub matched: usize,
    pub rejected: usize,
    pub results: Vec<MatchResult>,
}

impl MatchReport {
    /// True when every input matched. An empty batch passes.
    pub fn all_matched(&self) -> bool {
        self.rejected == 0
    }
}

/// Match every input, in parallel once `inputs.len() >= parallel_threshold`.
pub fn run(pattern: &CompiledPattern, inputs: Vec<String>, parallel_threshold: usize) -> MatchReport {
    let results: Vec<MatchResult> = if inputs.len() >= parallel_threshold {
        tracing::debug!("matching {} inputs in parallel", inputs.len());
        let pattern = pattern.clone().with_strategy(SearchStrategy::Worklist);
        inputs.into_par_iter().map(|input| check(&pattern, input)).collect()
    } else {
        tracing::debug!("matching {} inputs sequentially", inputs.len());
        inputs.into_iter().map(|input| check(pattern, input)).collect()
    };

    let matched = results.iter().filter(|r| r.matched).count();
    MatchReport {
        pattern: pattern.pattern().to_string(),
        matched,
        rejected: results.len() - matched,
        results,
    }
}

fn check(pattern: &CompiledPattern, input: String) -> MatchResult {
    MatchResult {
        matched: pattern.is_match(&input),
        input,
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
