// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! Match reports, one line per input:
//! ```text
//! MATCH    aab
//! NO MATCH ba
//! ```
//!
//! State graphs, one line per node:
//! ```text
//! 0: start -> 1
//! 1: star(literal 'a') -> 1, 2
//! 2: end
//! ```

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::color::scheme;
use crate::pattern::Graph;
use crate::runner::MatchReport;

/// Text output formatter with color support.
pub struct TextFormatter<W> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one line per input.
    pub fn write_report(&mut self, report: &MatchReport) -> std::io::Result<()> {
        for result in &report.results {
            let (label, spec) = if result.matched {
                ("MATCH   ", scheme::matched())
            } else {
                ("NO MATCH", scheme::rejected())
            };
            self.out.set_color(&spec)?;
            write!(self.out, "{}", label)?;
            self.out.reset()?;
            writeln!(self.out, " {}", result.input)?;
        }
        self.out.flush()
    }

    /// Write one line per node, in creation order.
    pub fn write_graph(&mut self, graph: &Graph) -> std::io::Result<()> {
        for (id, node) in graph.iter() {
            self.out.set_color(&scheme::state_id())?;
            write!(self.out, "{}", id)?;
            self.out.reset()?;
            write!(self.out, ": ")?;

            self.out.set_color(&scheme::state())?;
            write!(self.out, "{}", node.state)?;
            self.out.reset()?;

            if !node.transitions.is_empty() {
                let targets: Vec<String> = node.transitions.iter().map(|t| t.to_string()).collect();
                write!(self.out, " -> {}", targets.join(", "))?;
            }
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
