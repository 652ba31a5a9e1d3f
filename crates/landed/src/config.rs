// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for landed
//!
//! This module provides the command-line configuration, parsed once at
//! startup and passed by reference into the run pipeline.

use std::path::PathBuf;

use clap::Parser;
use landed_git::Style;
use landed_github::DEFAULT_ENDPOINT;

/// List the commits and pull requests that landed between two revisions
#[derive(Parser, Debug, Clone)]
#[command(name = "landed")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to the git repository on disk
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Git revision to start from (excluded from the listing)
    #[arg(short, long)]
    pub from: String,

    /// Git revision to stop at (included in the listing)
    #[arg(short, long)]
    pub to: String,

    /// Open a browser tab on each detected pull request
    #[arg(short, long, default_value = "false")]
    pub open: bool,

    /// GitHub token used to query pull request titles
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub GraphQL endpoint
    ///
    /// Override this for GitHub Enterprise installations.
    #[arg(long, env = "LANDED_GRAPHQL_URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Disable colored output
    #[arg(long, default_value = "false")]
    pub no_color: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs the git commands, the GraphQL query and its response. Logs are
    /// written to stderr so stdout only carries the listing.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            from: String::new(),
            to: String::new(),
            open: false,
            token: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            no_color: false,
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Create a configuration for the given revision range
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the repository path does not exist or is not a
    /// directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.path.exists() {
            return Err(ConfigError::PathNotFound(self.path.clone()));
        }
        if !self.path.is_dir() {
            return Err(ConfigError::PathNotDirectory(self.path.clone()));
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }

    /// Output style for a stdout that is (or is not) a terminal
    #[must_use]
    pub fn style(&self, is_terminal: bool) -> Style {
        if is_terminal && !self.no_color {
            Style::Colored
        } else {
            Style::Plain
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Repository path not found
    #[error("Repository path not found: {0}")]
    PathNotFound(PathBuf),

    /// Repository path is not a directory
    #[error("Repository path is not a directory: {0}")]
    PathNotDirectory(PathBuf),
}
