// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Explain command implementation.

use regfsm::cli::{ExplainArgs, OutputFormat};
use regfsm::color;
use regfsm::error::{Error, ExitCode};
use regfsm::output::{JsonFormatter, TextFormatter};
use regfsm::pattern::CompiledPattern;

/// Run the explain command.
pub fn run(args: &ExplainArgs) -> anyhow::Result<ExitCode> {
    let pattern = CompiledPattern::compile(&args.pattern).map_err(Error::from)?;

    match args.output {
        OutputFormat::Text => {
            TextFormatter::stdout(color::resolve_color()).write_graph(pattern.graph())?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock())
                .write_graph(pattern.pattern(), pattern.graph())?;
        }
    }

    Ok(ExitCode::Success)
}
