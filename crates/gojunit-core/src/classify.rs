// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Line classification for `go test -v` output
//!
//! Every structured pattern is anchored at both ends and restricts test
//! names to `[A-Za-z0-9_-]`, so program output that merely resembles a marker
//! falls through as [`LineKind::Text`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::report::CaseResult;

static TEST_START: Lazy<Regex> = Lazy::new(|| compile(r"^===\sRUN\s([A-Za-z0-9_-]+)\z"));

static TEST_RESULT: Lazy<Regex> = Lazy::new(|| {
    compile(r"^---\s(PASS|FAIL|SKIP):\s([A-Za-z0-9_-]+)\s\((\d+\.\d{2})\sseconds\)\z")
});

static SUITE_RESULT: Lazy<Regex> = Lazy::new(|| compile(r"^(PASS|FAIL)\z"));

static SUITE_SUMMARY: Lazy<Regex> = Lazy::new(|| {
    compile(r"^(?:ok|FAIL|\?)\s+([A-Za-z0-9_\-/\\.]+)\s+(?:(\d+\.\d+s)|(\[no\stest\sfiles\]))\z")
});

static EXIT_STATUS: Lazy<Regex> = Lazy::new(|| compile(r"^exit\s+status\s+\d+\z"));

// Patterns are literals, exercised by `test_patterns_compile`.
#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("line pattern must compile")
}

/// Shape of a single trimmed log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `=== RUN TestName`
    TestStart {
        /// Test about to run
        name: &'a str,
    },
    /// `--- FAIL: TestName (0.00 seconds)`
    TestResult {
        /// Verdict of the test
        result: CaseResult,
        /// Test name
        name: &'a str,
        /// Elapsed seconds with two decimals
        time: &'a str,
    },
    /// A bare `PASS` or `FAIL` ending a package's test stream
    SuiteResult,
    /// `ok  pkg/path  0.006s` or `?  pkg/path  [no test files]`
    SuiteSummary {
        /// Package path
        package: &'a str,
        /// The package had no test files
        no_test_files: bool,
    },
    /// `exit status 1`
    ExitStatus,
    /// Anything else, including blank lines
    Text(&'a str),
}

impl LineKind<'_> {
    /// Check if the line is free-form text
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

/// Classify a line already trimmed of surrounding tabs and spaces
#[must_use]
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(name) = TEST_START.captures(line).and_then(|caps| caps.get(1)) {
        return LineKind::TestStart {
            name: name.as_str(),
        };
    }

    if let Some(caps) = TEST_RESULT.captures(line) {
        let (_, [verdict, name, time]) = caps.extract();
        return LineKind::TestResult {
            result: CaseResult::from_verdict(verdict),
            name,
            time,
        };
    }

    if SUITE_RESULT.is_match(line) {
        return LineKind::SuiteResult;
    }

    if let Some(caps) = SUITE_SUMMARY.captures(line)
        && let Some(package) = caps.get(1)
    {
        return LineKind::SuiteSummary {
            package: package.as_str(),
            no_test_files: caps.get(3).is_some(),
        };
    }

    if EXIT_STATUS.is_match(line) {
        return LineKind::ExitStatus;
    }

    LineKind::Text(line)
}

/// Trim the tabs and spaces `go test` uses to indent its output
#[must_use]
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c| c == ' ' || c == '\t')
}
