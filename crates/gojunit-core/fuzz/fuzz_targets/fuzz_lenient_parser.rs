// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the lenient parser
//!
//! Lenient parsing must accept any text and keep suite counters consistent.

#![no_main]

use libfuzzer_sys::fuzz_target;

use gojunit_core::parse;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let report = parse(input);
        for suite in &report.suites {
            assert_eq!(suite.tests, suite.test_cases.len());
        }
    }
});
