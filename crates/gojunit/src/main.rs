// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gojunit: convert `go test -v` output into a JUnit XML report
//!
//! Reads the log from `--input` (or stdin) and writes the report to
//! `--output`. Exits with status 1 when the output path is missing or the
//! conversion fails.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use gojunit::{Config, run};
use tracing::error;

fn main() -> ExitCode {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    if config.output.is_none() {
        eprintln!("{}", Config::command().render_help());
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
