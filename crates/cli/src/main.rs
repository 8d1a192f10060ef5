// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! regfsm CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use regfsm::cli::{Cli, Command};
use regfsm::env::names;
use regfsm::error::ExitCode;

mod cmd_explain;
mod cmd_match;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(names::REGFSM_LOG).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("regfsm: {}", e);
            match e.downcast_ref::<regfsm::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Match(args)) => cmd_match::run(&cli, args),
        Some(Command::Explain(args)) => cmd_explain::run(args),
    }
}
