// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gojunit-core: `go test -v` output to JUnit XML
//!
//! This library crate classifies the lines of a verbose Go test log,
//! accumulates them into a [`Report`] of suites and test cases, and renders
//! that report as a JUnit-compatible XML document.
//!
//! # Example
//!
//! ```no_run
//! use gojunit_core::{ParserConfig, junit, parse_str};
//!
//! let log = "--- FAIL: TestA (0.00 seconds)\n\ta_test.go:3: boom\nFAIL\nFAIL\tpkg/a\t0.004s";
//! let report = parse_str(log, &ParserConfig::lenient()).unwrap();
//! let xml = junit::to_xml(&report).unwrap();
//! ```

pub mod classify;
pub mod error;
pub mod junit;
pub mod parser;
pub mod report;

pub use error::ReportError;
pub use parser::{MessageStyle, ParserConfig, ReportParser, parse, parse_reader, parse_str};
pub use report::{
    CaseResult, Message, MessageKind, Report, ReportTotals, Suite, TestCase, suite_name,
};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::ReportError;
    pub use crate::junit::to_xml;
    pub use crate::parser::{ParserConfig, ReportParser, parse_str};
    pub use crate::report::{CaseResult, Report, Suite, TestCase};
}
