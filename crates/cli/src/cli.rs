// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::pattern::SearchStrategy;

/// A minimal backtracking regular-expression engine
#[derive(Parser)]
#[command(name = "regfsm")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = crate::env::names::REGFSM_CONFIG)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Match inputs against a pattern
    Match(MatchArgs),
    /// Print the compiled state graph of a pattern
    Explain(ExplainArgs),
}

#[derive(clap::Args)]
pub struct MatchArgs {
    /// Pattern to compile
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Inputs to match (one per line from stdin when omitted)
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Search strategy (overrides config)
    #[arg(long, value_name = "STRATEGY")]
    pub strategy: Option<SearchStrategy>,

    /// Print nothing; report through the exit code only
    #[arg(short, long)]
    pub quiet: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct ExplainArgs {
    /// Pattern to compile
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
