// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for parse-then-render
//!
//! Any report the parser produces must render to well-formed XML.

#![no_main]

use libfuzzer_sys::fuzz_target;

use gojunit_core::{junit, parse};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let report = parse(input);
        let xml = junit::to_xml(&report).expect("report should render");
        assert!(xml.chars().all(junit::is_xml_char));
    }
});
