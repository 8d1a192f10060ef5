// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use crate::pattern::Graph;
use crate::runner::MatchReport;

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

/// Serialized form of a compiled state graph.
#[derive(Debug, Serialize)]
pub struct GraphOutput {
    pub pattern: String,
    pub start: usize,
    pub end: usize,
    pub nodes: Vec<NodeOutput>,
}

/// One node of a [`GraphOutput`].
#[derive(Debug, Serialize)]
pub struct NodeOutput {
    pub id: usize,
    pub state: String,
    pub transitions: Vec<usize>,
}

impl GraphOutput {
    pub fn new(pattern: &str, graph: &Graph) -> Self {
        Self {
            pattern: pattern.to_string(),
            start: graph.start().index(),
            end: graph.end().index(),
            nodes: graph
                .iter()
                .map(|(id, node)| NodeOutput {
                    id: id.index(),
                    state: node.state.to_string(),
                    transitions: node.transitions.iter().map(|t| t.index()).collect(),
                })
                .collect(),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_report(&mut self, report: &MatchReport) -> std::io::Result<()> {
        self.write_value(report)
    }

    pub fn write_graph(&mut self, pattern: &str, graph: &Graph) -> std::io::Result<()> {
        self.write_value(&GraphOutput::new(pattern, graph))
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
