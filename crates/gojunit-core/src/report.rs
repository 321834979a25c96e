// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report record model
//!
//! Plain data describing a converted test log: a [`Report`] holds
//! [`Suite`]s in arrival order, each suite holds [`TestCase`]s, and failed
//! or skipped cases carry diagnostic [`Message`]s.

use serde::{Deserialize, Serialize};

/// Outcome of a single test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseResult {
    /// Test passed
    Passed,
    /// Test failed
    Failed,
    /// Test was skipped
    Skipped,
    /// Verdict word was not recognized
    Unknown,
}

/// Verdict words printed by `go test -v` and the results they map to
const VERDICTS: [(&str, CaseResult); 3] = [
    ("PASS", CaseResult::Passed),
    ("FAIL", CaseResult::Failed),
    ("SKIP", CaseResult::Skipped),
];

impl CaseResult {
    /// Look up the result for a verdict word such as `PASS`
    #[must_use]
    pub fn from_verdict(verdict: &str) -> Self {
        VERDICTS
            .iter()
            .find(|(word, _)| *word == verdict)
            .map_or(Self::Unknown, |(_, result)| *result)
    }

    /// Kind of message attached to diagnostics of a case with this result
    ///
    /// Only failed and skipped cases collect messages.
    #[must_use]
    pub fn message_kind(self) -> Option<MessageKind> {
        match self {
            Self::Failed => Some(MessageKind::Failure),
            Self::Skipped => Some(MessageKind::Skipped),
            Self::Passed | Self::Unknown => None,
        }
    }
}

/// Kind of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Diagnostic of a failed test
    Failure,
    /// Reason a test was skipped
    Skipped,
}

impl MessageKind {
    /// XML element name
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Failure => "failure",
            Self::Skipped => "skipped",
        }
    }

    /// Value of the `type` attribute
    #[must_use]
    pub fn type_tag(self) -> &'static str {
        match self {
            Self::Failure => "gotest.error",
            Self::Skipped => "gotest.skipped",
        }
    }

    /// Value of the `message` attribute
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Failure => "error",
            Self::Skipped => "skipped",
        }
    }
}

/// Diagnostic text attached to a failed or skipped test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Failure or skip
    pub kind: MessageKind,
    /// Diagnostic text
    pub content: String,
}

impl Message {
    /// Separator appended after every line of a joined message
    pub const SEPARATOR: char = ';';

    /// Create a message holding a single diagnostic line
    #[must_use]
    pub fn new(kind: MessageKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    /// Append a diagnostic line followed by [`Message::SEPARATOR`]
    pub fn push_line(&mut self, line: &str) {
        self.content.push_str(line);
        self.content.push(Self::SEPARATOR);
    }
}

/// A single test case within a suite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Test function name
    pub name: String,
    /// Elapsed time in seconds, as printed (e.g. `"0.00"`)
    pub time: String,
    /// Owning suite's name, assigned when the suite closes
    pub class_name: String,
    /// Test outcome
    pub result: CaseResult,
    /// Diagnostics in the order they were read
    pub messages: Vec<Message>,
}

impl TestCase {
    /// Create a case from a test-result line's fields
    #[must_use]
    pub fn new(name: impl Into<String>, time: impl Into<String>, result: CaseResult) -> Self {
        Self {
            name: name.into(),
            time: time.into(),
            class_name: String::new(),
            result,
            messages: Vec::new(),
        }
    }

    /// Check if the test failed
    #[must_use]
    pub fn failed(&self) -> bool {
        self.result == CaseResult::Failed
    }

    /// Check if the test was skipped
    #[must_use]
    pub fn skipped(&self) -> bool {
        self.result == CaseResult::Skipped
    }
}

/// Test cases of one package, closed by its summary line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suite {
    /// Display name in `Package.Class` form
    pub name: String,
    /// Number of test cases
    pub tests: usize,
    /// Always zero; go test output does not distinguish errors from failures
    pub errors: usize,
    /// Number of failed cases
    pub failures: usize,
    /// Number of skipped cases
    pub skip: usize,
    /// Cases in the order their results were read
    pub test_cases: Vec<TestCase>,
}

impl Suite {
    /// Build a suite from its cases
    ///
    /// Counters are derived from `cases` and every case's `class_name` is set
    /// to `name`.
    #[must_use]
    pub fn from_cases(name: impl Into<String>, cases: impl IntoIterator<Item = TestCase>) -> Self {
        let name = name.into();
        let test_cases: Vec<TestCase> = cases
            .into_iter()
            .map(|mut case| {
                case.class_name.clone_from(&name);
                case
            })
            .collect();

        Self {
            tests: test_cases.len(),
            errors: 0,
            failures: test_cases.iter().filter(|c| c.failed()).count(),
            skip: test_cases.iter().filter(|c| c.skipped()).count(),
            test_cases,
            name,
        }
    }

    /// Number of cases that neither failed nor were skipped
    #[must_use]
    pub fn passed(&self) -> usize {
        self.tests
            .saturating_sub(self.failures)
            .saturating_sub(self.skip)
    }
}

/// Derive a suite display name from a package path
///
/// Dots become underscores, then `.` and the last path segment are
/// appended (`gojunitxml/package_1` becomes `gojunitxml/package_1.package_1`).
/// A path without a usable last segment repeats itself (`check` becomes
/// `check.check`, `check/` becomes `check/.check/`).
#[must_use]
pub fn suite_name(package: &str) -> String {
    let base = package.replace('.', "_");
    let class = match base.rfind('/') {
        Some(idx) if idx + 1 < base.len() => &base[idx + 1..],
        _ => base.as_str(),
    };
    format!("{base}.{class}")
}

/// Aggregate counts across a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Number of suites
    pub suites: usize,
    /// Number of test cases
    pub tests: usize,
    /// Number of failed cases
    pub failures: usize,
    /// Number of skipped cases
    pub skipped: usize,
}

/// The converted test log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Suites in the order their summary lines were read
    pub suites: Vec<Suite>,
}

impl Report {
    /// Create an empty report
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if no suite was closed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    /// Sum counters across all suites
    #[must_use]
    pub fn totals(&self) -> ReportTotals {
        self.suites
            .iter()
            .fold(ReportTotals::default(), |acc, suite| ReportTotals {
                suites: acc.suites + 1,
                tests: acc.tests + suite.tests,
                failures: acc.failures + suite.failures,
                skipped: acc.skipped + suite.skip,
            })
    }

    /// Check if no test failed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.suites.iter().all(|s| s.failures == 0)
    }

    /// Render the report as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, crate::ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_case_result_lookup() {
        assert_eq!(CaseResult::from_verdict("PASS"), CaseResult::Passed);
        assert_eq!(CaseResult::from_verdict("FAIL"), CaseResult::Failed);
        assert_eq!(CaseResult::from_verdict("SKIP"), CaseResult::Skipped);
        assert_eq!(CaseResult::from_verdict("pass"), CaseResult::Unknown);
        assert_eq!(CaseResult::from_verdict(""), CaseResult::Unknown);
    }

    #[test]
    fn test_message_kind_per_result() {
        assert_eq!(
            CaseResult::Failed.message_kind(),
            Some(MessageKind::Failure)
        );
        assert_eq!(
            CaseResult::Skipped.message_kind(),
            Some(MessageKind::Skipped)
        );
        assert_eq!(CaseResult::Passed.message_kind(), None);
        assert_eq!(CaseResult::Unknown.message_kind(), None);
    }

    #[test]
    fn test_message_kind_tables() {
        assert_eq!(MessageKind::Failure.tag(), "failure");
        assert_eq!(MessageKind::Failure.type_tag(), "gotest.error");
        assert_eq!(MessageKind::Failure.label(), "error");
        assert_eq!(MessageKind::Skipped.tag(), "skipped");
        assert_eq!(MessageKind::Skipped.type_tag(), "gotest.skipped");
        assert_eq!(MessageKind::Skipped.label(), "skipped");
    }

    #[test]
    fn test_message_push_line() {
        let mut message = Message::new(MessageKind::Failure, "");
        message.push_line("first");
        message.push_line("second");
        assert_eq!(message.content, "first;second;");
    }

    #[test]
    fn test_suite_name() {
        assert_eq!(
            suite_name("gojunitxml/package_1"),
            "gojunitxml/package_1.package_1"
        );
        assert_eq!(suite_name("check"), "check.check");
        assert_eq!(suite_name("check/"), "check/.check/");
        assert_eq!(
            suite_name("go.junitxml/package_1"),
            "go_junitxml/package_1.package_1"
        );
        assert_eq!(suite_name("a.b"), "a_b.a_b");
    }

    #[test]
    fn test_suite_from_cases() {
        let cases = vec![
            TestCase::new("TestA", "0.00", CaseResult::Passed),
            TestCase::new("TestB", "0.01", CaseResult::Failed),
            TestCase::new("TestC", "0.00", CaseResult::Skipped),
            TestCase::new("TestD", "1.50", CaseResult::Failed),
        ];

        let suite = Suite::from_cases("pkg.pkg", cases);
        assert_eq!(suite.tests, 4);
        assert_eq!(suite.errors, 0);
        assert_eq!(suite.failures, 2);
        assert_eq!(suite.skip, 1);
        assert_eq!(suite.passed(), 1);
        assert!(suite.test_cases.iter().all(|c| c.class_name == "pkg.pkg"));
    }

    #[test]
    fn test_passed_with_inconsistent_counters() {
        let mut suite = Suite::from_cases("pkg.pkg", Vec::new());
        suite.failures = 2;
        suite.skip = 1;
        assert_eq!(suite.passed(), 0);
    }

    #[test]
    fn test_report_totals() {
        let report = Report {
            suites: vec![
                Suite::from_cases(
                    "a.a",
                    vec![
                        TestCase::new("TestA", "0.00", CaseResult::Passed),
                        TestCase::new("TestB", "0.00", CaseResult::Failed),
                    ],
                ),
                Suite::from_cases("b.b", Vec::new()),
                Suite::from_cases(
                    "c.c",
                    vec![TestCase::new("TestC", "0.00", CaseResult::Skipped)],
                ),
            ],
        };

        assert_eq!(
            report.totals(),
            ReportTotals {
                suites: 3,
                tests: 3,
                failures: 1,
                skipped: 1,
            }
        );
        assert!(!report.all_passed());
        assert!(!report.is_empty());
        assert!(Report::empty().is_empty());
    }

    #[test]
    fn test_report_to_json() {
        let mut case = TestCase::new("TestB", "0.00", CaseResult::Failed);
        case.messages
            .push(Message::new(MessageKind::Failure, "main_test.go:23:"));
        let report = Report {
            suites: vec![Suite::from_cases("check.check", vec![case])],
        };

        let json = report.to_json().expect("Should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("Should be JSON");
        assert_eq!(value["suites"][0]["name"], "check.check");
        assert_eq!(value["suites"][0]["test_cases"][0]["result"], "failed");
        assert_eq!(
            value["suites"][0]["test_cases"][0]["messages"][0]["kind"],
            "failure"
        );

        let back: Report = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(back, report);
    }
}
