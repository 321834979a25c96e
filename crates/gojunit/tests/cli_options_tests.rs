// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI tests for option parsing
//!
//! These tests verify how flags map onto `Config` and the parser settings
//! it selects, without spawning the binary.

use clap::Parser;
use gojunit::config::{Config, MessagesArg, OutputFormat};
use gojunit_core::MessageStyle;
use std::path::PathBuf;
use tracing::Level;

// ============================================================================
// --input / --output
// ============================================================================

#[test]
fn test_input_and_output_long_flags() {
    let config = Config::try_parse_from([
        "gojunit",
        "--input",
        "go-test.log",
        "--output",
        "report.xml",
    ])
    .expect("parse should succeed");
    assert_eq!(config.input, Some(PathBuf::from("go-test.log")));
    assert_eq!(config.output, Some(PathBuf::from("report.xml")));
}

#[test]
fn test_input_and_output_short_flags() {
    let config = Config::try_parse_from(["gojunit", "-i", "in.log", "-o", "out.xml"])
        .expect("parse should succeed");
    assert_eq!(config.input, Some(PathBuf::from("in.log")));
    assert_eq!(config.output, Some(PathBuf::from("out.xml")));
}

#[test]
fn test_input_defaults_to_stdin() {
    let config =
        Config::try_parse_from(["gojunit", "-o", "out.xml"]).expect("parse should succeed");
    assert!(config.input.is_none());
}

#[test]
fn test_output_missing_is_caught_by_validate() {
    // clap accepts the invocation; the missing output is reported by validate
    // so that the binary can print usage itself.
    let config = Config::try_parse_from(["gojunit"]).expect("parse should succeed");
    assert!(config.validate().is_err());
}

// ============================================================================
// --strict / --messages
// ============================================================================

#[test]
fn test_strict_flag() {
    let config = Config::try_parse_from(["gojunit", "-o", "out.xml", "--strict"])
        .expect("parse should succeed");
    assert!(config.strict);
    let parser = config.parser_config();
    assert!(parser.strict);
    assert_eq!(parser.messages, MessageStyle::Joined);
}

#[test]
fn test_messages_values() {
    let config = Config::try_parse_from(["gojunit", "-o", "out.xml", "--messages", "joined"])
        .expect("parse should succeed");
    assert_eq!(config.messages, Some(MessagesArg::Joined));
    assert_eq!(config.parser_config().messages, MessageStyle::Joined);
    assert!(!config.parser_config().strict);

    let config = Config::try_parse_from(["gojunit", "-o", "out.xml", "--messages", "per-line"])
        .expect("parse should succeed");
    assert_eq!(config.messages, Some(MessagesArg::PerLine));
}

#[test]
fn test_messages_rejects_unknown_value() {
    let result = Config::try_parse_from(["gojunit", "-o", "out.xml", "--messages", "grouped"]);
    assert!(result.is_err());
}

// ============================================================================
// --format
// ============================================================================

#[test]
fn test_format_defaults_to_xml() {
    let config =
        Config::try_parse_from(["gojunit", "-o", "out.xml"]).expect("parse should succeed");
    assert_eq!(config.format, OutputFormat::Xml);
}

#[test]
fn test_format_json() {
    let config = Config::try_parse_from(["gojunit", "-o", "out.json", "--format", "json"])
        .expect("parse should succeed");
    assert_eq!(config.format, OutputFormat::Json);
}

// ============================================================================
// --verbose / --quiet
// ============================================================================

#[test]
fn test_verbose_sets_debug_log_level() {
    let config = Config::try_parse_from(["gojunit", "-o", "out.xml", "-v"])
        .expect("parse should succeed");
    assert!(config.verbose);
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_quiet_sets_warn_log_level() {
    let config = Config::try_parse_from(["gojunit", "-o", "out.xml", "--quiet"])
        .expect("parse should succeed");
    assert!(config.quiet);
    assert_eq!(config.log_level(), Level::WARN);
}

#[test]
fn test_verbose_wins_over_quiet() {
    let config = Config::try_parse_from(["gojunit", "-o", "out.xml", "-v", "-q"])
        .expect("parse should succeed");
    assert_eq!(config.log_level(), Level::DEBUG);
}
