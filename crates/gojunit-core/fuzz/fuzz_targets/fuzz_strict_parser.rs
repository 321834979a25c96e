// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the strict parser
//!
//! This feeds raw bytes through `parse_reader`, exercising UTF-8 and
//! strict-mode rejection paths. Errors are fine; panics are not.

#![no_main]

use libfuzzer_sys::fuzz_target;

use gojunit_core::{ParserConfig, parse_reader};

fuzz_target!(|data: &[u8]| {
    let _ = parse_reader(data, &ParserConfig::strict());
});
