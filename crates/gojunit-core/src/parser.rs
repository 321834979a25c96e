// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! `go test -v` output parsing
//!
//! [`ReportParser`] consumes trimmed log lines one at a time, buffers the
//! test cases of the package currently running and closes a [`Suite`] every
//! time a package summary line arrives. Cases still buffered when the input
//! ends are discarded, so a truncated log yields a partial report.
//!
//! Two postures are available through [`ParserConfig`]:
//! - lenient (default): lines that fit nowhere are ignored and parsing never
//!   fails
//! - strict: every line must have the shape expected at that point, otherwise
//!   parsing stops with [`ReportError::Parse`]
//!
//! # Example
//!
//! ```
//! use gojunit_core::parser::{ParserConfig, parse_str};
//!
//! let log = "=== RUN TestA\n--- PASS: TestA (0.00 seconds)\nPASS\nok  \tpkg/a\t0.005s";
//! let report = parse_str(log, &ParserConfig::lenient()).unwrap();
//! assert_eq!(report.suites[0].name, "pkg/a.a");
//! ```

use std::io::{BufRead, ErrorKind};

use tracing::{debug, trace, warn};

use crate::classify::{LineKind, classify, trim_line};
use crate::error::ReportError;
use crate::report::{Message, Report, Suite, TestCase, suite_name};

// ============================================================================
// Configuration
// ============================================================================

/// How diagnostic lines of one test case are grouped into messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessageStyle {
    /// Every diagnostic line becomes its own message
    #[default]
    PerLine,
    /// All diagnostic lines share one message, each followed by `;`
    Joined,
}

/// Parser settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Fail on lines that do not fit the expected shape
    pub strict: bool,
    /// Grouping of diagnostic lines
    pub messages: MessageStyle,
}

impl ParserConfig {
    /// Ignore unrecognized lines, one message per diagnostic line
    #[must_use]
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Reject unrecognized lines, diagnostics joined into one message
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict: true,
            messages: MessageStyle::Joined,
        }
    }

    /// Override the message grouping
    #[must_use]
    pub fn with_messages(mut self, messages: MessageStyle) -> Self {
        self.messages = messages;
        self
    }
}

// ============================================================================
// Parser State
// ============================================================================

/// Position of the parser within a package's output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between test cases or packages
    AwaitingEvent,
    /// After `=== RUN`, a test result must follow (strict only)
    AwaitingResult,
    /// After a FAIL or SKIP result, reading its diagnostics
    CollectingMessage,
    /// After a bare `PASS`/`FAIL`, the package summary must follow (strict only)
    AwaitingSummary,
}

/// Accumulates test cases and suites from log lines
///
/// One parser serves one parse; it owns all intermediate state.
#[derive(Debug)]
pub struct ReportParser {
    config: ParserConfig,
    state: State,
    cases: Vec<TestCase>,
    report: Report,
}

impl ReportParser {
    /// Create a new parser
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            state: State::AwaitingEvent,
            cases: Vec::new(),
            report: Report::empty(),
        }
    }

    /// Process a single line of output
    ///
    /// The line may still carry its indentation; it is trimmed of tabs and
    /// spaces before classification.
    ///
    /// # Errors
    ///
    /// In strict mode, returns `ReportError::Parse` carrying `line` if it does
    /// not fit the current state. Lenient parsing never fails.
    pub fn push_line(&mut self, line: &str) -> Result<(), ReportError> {
        let kind = classify(trim_line(line));
        trace!(?kind, state = ?self.state, "classified line");

        if !self.config.strict {
            self.step_lenient(kind);
        } else if !self.step_strict(kind) {
            warn!(line, state = ?self.state, "unexpected line in strict mode");
            return Err(ReportError::parse(line));
        }
        Ok(())
    }

    /// Suites closed so far
    #[must_use]
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Finish parsing and return the report
    ///
    /// Test cases of a package whose summary line never arrived are dropped.
    #[must_use]
    pub fn finish(self) -> Report {
        if !self.cases.is_empty() {
            debug!(
                dropped = self.cases.len(),
                "discarding test cases of unfinished suite"
            );
        }
        self.report
    }

    fn step_lenient(&mut self, kind: LineKind<'_>) {
        match kind {
            LineKind::TestStart { .. } | LineKind::SuiteResult => {
                self.state = State::AwaitingEvent;
            }
            LineKind::TestResult { result, name, time } => {
                self.open_case(TestCase::new(name, time, result));
            }
            LineKind::SuiteSummary { package, .. } => self.close_suite(package),
            LineKind::ExitStatus => {}
            LineKind::Text(text) => {
                if self.state == State::CollectingMessage {
                    self.append_diagnostic(text);
                }
            }
        }
    }

    /// Advance the strict state machine, returning `false` on an unexpected line
    fn step_strict(&mut self, kind: LineKind<'_>) -> bool {
        match (self.state, kind) {
            (
                State::AwaitingEvent | State::CollectingMessage,
                LineKind::TestStart { .. },
            ) => self.state = State::AwaitingResult,
            (State::AwaitingEvent | State::CollectingMessage, LineKind::SuiteResult) => {
                self.state = State::AwaitingSummary;
            }
            (
                State::AwaitingEvent,
                LineKind::SuiteSummary {
                    package,
                    no_test_files: true,
                },
            ) => self.close_suite(package),
            (State::AwaitingResult, LineKind::TestResult { result, name, time }) => {
                self.open_case(TestCase::new(name, time, result));
            }
            (State::CollectingMessage, LineKind::Text(text)) => self.append_diagnostic(text),
            (State::AwaitingSummary, LineKind::ExitStatus) => {}
            (State::AwaitingSummary, LineKind::SuiteSummary { package, .. }) => {
                self.close_suite(package);
            }
            _ => return false,
        }
        true
    }

    fn open_case(&mut self, case: TestCase) {
        self.state = if case.result.message_kind().is_some() {
            State::CollectingMessage
        } else {
            State::AwaitingEvent
        };
        self.cases.push(case);
    }

    /// Record a diagnostic line; a blank line is kept as an empty entry so
    /// paragraphs stay apart
    fn append_diagnostic(&mut self, text: &str) {
        let Some(case) = self.cases.last_mut() else {
            return;
        };
        let Some(kind) = case.result.message_kind() else {
            return;
        };

        match self.config.messages {
            MessageStyle::PerLine => case.messages.push(Message::new(kind, text)),
            MessageStyle::Joined => {
                if case.messages.is_empty() {
                    case.messages.push(Message::new(kind, String::new()));
                }
                if let Some(message) = case.messages.last_mut() {
                    message.push_line(text);
                }
            }
        }
    }

    fn close_suite(&mut self, package: &str) {
        let suite = Suite::from_cases(suite_name(package), self.cases.drain(..));
        debug!(
            suite = %suite.name,
            tests = suite.tests,
            failures = suite.failures,
            skip = suite.skip,
            "closed suite"
        );
        self.report.suites.push(suite);
        self.state = State::AwaitingEvent;
    }
}

impl Default for ReportParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

// ============================================================================
// Parsing Functions
// ============================================================================

/// Parse complete `go test -v` output
///
/// # Errors
///
/// Returns `ReportError::Parse` in strict mode if a line does not fit.
pub fn parse_str(output: &str, config: &ParserConfig) -> Result<Report, ReportError> {
    let mut parser = ReportParser::new(config.clone());
    for line in output.lines() {
        parser.push_line(line)?;
    }
    Ok(parser.finish())
}

/// Parse `go test -v` output leniently
///
/// Unrecognized lines are ignored, so this cannot fail.
#[must_use]
pub fn parse(output: &str) -> Report {
    let mut parser = ReportParser::default();
    for line in output.lines() {
        // Lenient parsing has no error path.
        let _ = parser.push_line(line);
    }
    parser.finish()
}

/// Parse `go test -v` output from a reader
///
/// Both `\n` and `\r\n` line endings are accepted.
///
/// # Errors
///
/// Returns `ReportError::Io` if reading fails, `ReportError::Utf8` if a line
/// is not valid UTF-8, and `ReportError::Parse` in strict mode if a line does
/// not fit.
pub fn parse_reader<R: BufRead>(reader: R, config: &ParserConfig) -> Result<Report, ReportError> {
    let mut parser = ReportParser::new(config.clone());
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| match err.kind() {
            ErrorKind::InvalidData => ReportError::Utf8 {
                line_number: idx + 1,
            },
            _ => ReportError::Io(err),
        })?;
        parser.push_line(&line)?;
    }
    Ok(parser.finish())
}
