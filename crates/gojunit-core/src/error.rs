// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gojunit-core

use thiserror::Error;

/// Errors that can occur while converting a test log into a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// A line did not have the shape expected in strict mode
    #[error("Error while parsing at line : {line}")]
    Parse {
        /// The offending line, exactly as it appeared in the input
        line: String,
    },

    /// The report could not be rendered
    #[error("Serialization error: {message}")]
    Serialize {
        /// Description of the writer failure
        message: String,
    },

    /// Error rendering the report as JSON
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error reading the test log
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of the test log was not valid UTF-8
    #[error("Invalid UTF-8 on line {line_number}")]
    Utf8 {
        /// One-based number of the undecodable line
        line_number: usize,
    },
}

impl ReportError {
    pub(crate) fn parse(line: &str) -> Self {
        Self::Parse {
            line: line.to_string(),
        }
    }

    pub(crate) fn serialize(err: impl std::fmt::Display) -> Self {
        Self::Serialize {
            message: err.to_string(),
        }
    }
}
