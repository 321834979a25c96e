// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gojunit library
//!
//! This module exports the command-line collaborator of gojunit-core for use
//! in integration tests and by the binary.

pub mod config;
pub mod run;

pub use config::{Config, ConfigError, OutputFormat};
pub use run::run;
