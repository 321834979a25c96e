// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the gojunit command
//!
//! This module provides the command-line options, the parser settings they
//! select, and the logging level.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gojunit_core::{MessageStyle, ParserConfig};

/// Convert verbose `go test` output into a JUnit XML report
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gojunit")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to the `go test -v` log
    ///
    /// Defaults to standard input.
    #[arg(short, long, env = "GOJUNIT_INPUT")]
    pub input: Option<PathBuf>,

    /// Path of the report to write (required)
    #[arg(short, long, env = "GOJUNIT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Fail on any line that does not fit the expected log structure
    ///
    /// Without this flag unrecognized lines are ignored.
    #[arg(long, default_value = "false")]
    pub strict: bool,

    /// How diagnostic lines of a failed or skipped test are grouped
    ///
    /// Defaults to `per-line` in lenient mode and `joined` in strict mode.
    #[arg(long, value_enum)]
    pub messages: Option<MessagesArg>,

    /// Report encoding
    #[arg(long, value_enum, default_value_t = OutputFormat::Xml)]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// Message grouping as spelled on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessagesArg {
    /// One message per diagnostic line
    PerLine,
    /// One message per test, lines separated by `;`
    Joined,
}

impl From<MessagesArg> for MessageStyle {
    fn from(arg: MessagesArg) -> Self {
        match arg {
            MessagesArg::PerLine => Self::PerLine,
            MessagesArg::Joined => Self::Joined,
        }
    }
}

/// Output encoding of the report
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// JUnit XML
    #[default]
    Xml,
    /// JSON rendering of the report model
    Json,
}

impl Config {
    /// Parser settings selected by `--strict` and `--messages`
    #[must_use]
    pub fn parser_config(&self) -> ParserConfig {
        let base = if self.strict {
            ParserConfig::strict()
        } else {
            ParserConfig::lenient()
        };
        match self.messages {
            Some(messages) => base.with_messages(messages.into()),
            None => base,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No output path is given
    /// - The input path is given but doesn't exist or isn't a file
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.is_none() {
            return Err(ConfigError::MissingOutput);
        }

        if let Some(ref input) = self.input {
            if !input.exists() {
                return Err(ConfigError::InputNotFound(input.clone()));
            }
            if !input.is_file() {
                return Err(ConfigError::InputNotFile(input.clone()));
            }
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No output path given
    #[error("Missing required option: --output <path>")]
    MissingOutput,

    /// Input path not found
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Input path is not a regular file
    #[error("Input path is not a file: {0}")]
    InputNotFile(PathBuf),
}
