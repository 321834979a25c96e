// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Conversion driver
//!
//! Reads the log named by [`Config`] (or stdin), hands it to the core
//! parser and writes the rendered report to the output path.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use gojunit_core::{Report, ReportTotals, junit, parse_reader};
use tracing::{debug, info};

use crate::config::{Config, ConfigError, OutputFormat};

/// Convert the configured input and write the report
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the input cannot be
/// read or parsed, or the report cannot be rendered or written.
pub fn run(config: &Config) -> Result<ReportTotals> {
    config.validate()?;
    let output = config.output.as_deref().ok_or(ConfigError::MissingOutput)?;

    let report = match config.input.as_deref() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input {}", path.display()))?;
            convert(BufReader::new(file), config)
                .with_context(|| format!("Failed to convert {}", path.display()))?
        }
        None => {
            debug!("reading test log from stdin");
            convert(io::stdin().lock(), config).context("Failed to convert stdin")?
        }
    };

    let rendered = render(&report, config.format)?;
    write_report(output, &rendered)?;

    let totals = report.totals();
    info!(
        output = %output.display(),
        suites = totals.suites,
        tests = totals.tests,
        failures = totals.failures,
        skipped = totals.skipped,
        "wrote report"
    );
    Ok(totals)
}

/// Parse a test log into a report using the configured parser settings
///
/// # Errors
///
/// Returns an error if reading fails or, in strict mode, a line does not fit.
pub fn convert<R: BufRead>(reader: R, config: &Config) -> Result<Report> {
    Ok(parse_reader(reader, &config.parser_config())?)
}

/// Render a report in the requested format
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Xml => junit::to_xml(report),
        OutputFormat::Json => report.to_json(),
    };
    rendered.context("Failed to render report")
}

fn write_report(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write report {}", path.display()))
}
