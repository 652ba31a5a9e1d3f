// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! landed library
//!
//! This module exports the command-line configuration and the run pipeline
//! for use by the binary and in integration tests.

pub mod app;
pub mod browser;
pub mod config;

pub use app::{AppError, RunSummary, run};
pub use browser::{Browser, BrowserError, SystemBrowser, open_entries};
pub use config::{Config, ConfigError};
