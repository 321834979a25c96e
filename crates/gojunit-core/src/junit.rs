// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! JUnit XML rendering
//!
//! The layout is part of the compatibility surface: element nesting,
//! attribute names and attribute order are fixed. Elements are indented by
//! two spaces per level, and an element without children is written as an
//! explicit open/close pair on one line rather than a self-closing tag.
//!
//! Characters XML 1.0 cannot carry at all (control characters such as the
//! ANSI escape `\x1b`, NUL, U+FFFE and U+FFFF) are written as U+FFFD.

use std::borrow::Cow;
use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::ReportError;
use crate::report::{Message, Report, Suite, TestCase};

const TAG_REPORT: &str = "testsuites";
const TAG_TEST_SUITE: &str = "testsuite";
const TAG_TEST_CASE: &str = "testcase";

const INDENT_WIDTH: usize = 2;

/// Check if `c` matches the XML 1.0 `Char` production
#[must_use]
pub fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Replace characters XML cannot represent with U+FFFD
fn xml_text(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(
            text.chars()
                .map(|c| if is_xml_char(c) { c } else { char::REPLACEMENT_CHARACTER })
                .collect(),
        )
    }
}

/// Render a report as a JUnit XML document
///
/// # Errors
///
/// Returns `ReportError::Serialize` if the document cannot be written.
pub fn to_xml(report: &Report) -> Result<String, ReportError> {
    let bytes = write_xml(report, Vec::new())?;
    String::from_utf8(bytes).map_err(ReportError::serialize)
}

/// Write a report as a JUnit XML document into `inner`
///
/// Returns `inner` once the document is complete.
///
/// # Errors
///
/// Returns `ReportError::Serialize` if writing fails.
pub fn write_xml<W: Write>(report: &Report, inner: W) -> Result<W, ReportError> {
    let mut writer = Writer::new_with_indent(inner, b' ', INDENT_WIDTH);
    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;

    emit(&mut writer, Event::Start(BytesStart::new(TAG_REPORT)))?;
    for suite in &report.suites {
        write_suite(&mut writer, suite)?;
    }
    close(&mut writer, TAG_REPORT, report.suites.is_empty())?;

    Ok(writer.into_inner())
}

fn write_suite<W: Write>(writer: &mut Writer<W>, suite: &Suite) -> Result<(), ReportError> {
    let tests = suite.tests.to_string();
    let errors = suite.errors.to_string();
    let failures = suite.failures.to_string();
    let skip = suite.skip.to_string();

    let name = xml_text(&suite.name);

    let start = BytesStart::new(TAG_TEST_SUITE).with_attributes([
        ("name", &*name),
        ("tests", tests.as_str()),
        ("errors", errors.as_str()),
        ("failures", failures.as_str()),
        ("skip", skip.as_str()),
    ]);
    emit(writer, Event::Start(start))?;
    for case in &suite.test_cases {
        write_case(writer, case)?;
    }
    close(writer, TAG_TEST_SUITE, suite.test_cases.is_empty())
}

fn write_case<W: Write>(writer: &mut Writer<W>, case: &TestCase) -> Result<(), ReportError> {
    let class_name = xml_text(&case.class_name);
    let name = xml_text(&case.name);
    let time = xml_text(&case.time);

    let start = BytesStart::new(TAG_TEST_CASE).with_attributes([
        ("classname", &*class_name),
        ("name", &*name),
        ("time", &*time),
    ]);
    emit(writer, Event::Start(start))?;
    for message in &case.messages {
        write_message(writer, message)?;
    }
    close(writer, TAG_TEST_CASE, case.messages.is_empty())
}

fn write_message<W: Write>(writer: &mut Writer<W>, message: &Message) -> Result<(), ReportError> {
    let tag = message.kind.tag();
    let start = BytesStart::new(tag).with_attributes([
        ("message", message.kind.label()),
        ("type", message.kind.type_tag()),
    ]);
    emit(writer, Event::Start(start))?;
    emit(writer, Event::Text(BytesText::new(&xml_text(&message.content))))?;
    emit(writer, Event::End(BytesEnd::new(tag)))
}

/// Close `tag`; a childless element gets an empty text node so that the
/// closing tag stays on the opening tag's line
fn close<W: Write>(writer: &mut Writer<W>, tag: &str, childless: bool) -> Result<(), ReportError> {
    if childless {
        emit(writer, Event::Text(BytesText::new("")))?;
    }
    emit(writer, Event::End(BytesEnd::new(tag)))
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), ReportError> {
    writer.write_event(event).map_err(ReportError::serialize)
}
