// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match command implementation.

use std::io::{BufRead, ErrorKind};
use std::path::PathBuf;

use regfsm::cli::{Cli, MatchArgs, OutputFormat};
use regfsm::color;
use regfsm::config::{self, Config};
use regfsm::discovery;
use regfsm::error::{Error, ExitCode};
use regfsm::output::{JsonFormatter, TextFormatter};
use regfsm::pattern::CompiledPattern;
use regfsm::runner;

/// Run the match command.
pub fn run(cli: &Cli, args: &MatchArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = match discovery::resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load(&path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };

    let strategy = args.strategy.unwrap_or(config.matcher.strategy);
    tracing::debug!("using {:?} search", strategy);

    let pattern = CompiledPattern::compile(&args.pattern)
        .map_err(Error::from)?
        .with_strategy(strategy);

    let inputs = if args.inputs.is_empty() {
        read_stdin_lines()?
    } else {
        args.inputs.clone()
    };

    let report = runner::run(&pattern, inputs, config.matcher.parallel_threshold);
    tracing::debug!(
        "{} matched, {} rejected",
        report.matched,
        report.rejected
    );

    if !args.quiet {
        match args.output {
            OutputFormat::Text => {
                let choice = color::resolve(args.color, args.no_color);
                TextFormatter::stdout(choice).write_report(&report)?;
            }
            OutputFormat::Json => {
                JsonFormatter::new(std::io::stdout().lock()).write_report(&report)?;
            }
        }
    }

    Ok(if report.all_matched() {
        ExitCode::Success
    } else {
        ExitCode::NoMatch
    })
}

fn read_stdin_lines() -> Result<Vec<String>, Error> {
    std::io::stdin()
        .lock()
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(|source| match source.kind() {
            ErrorKind::InvalidData => Error::Argument("stdin is not valid UTF-8".to_string()),
            _ => Error::Io {
                path: PathBuf::from("<stdin>"),
                source,
            },
        })
}
