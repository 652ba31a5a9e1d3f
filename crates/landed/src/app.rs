// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The landed pipeline
//!
//! One run resolves the GitHub repository from the remotes, reads the
//! first-parent log, fetches pull request metadata in a single query, prints
//! one line per entry and optionally opens the pull requests.

use std::io::Write;
use std::sync::Arc;

use landed_git::{Git, GitError, Style, collect_entries, parse_remotes, resolve_repository};
use landed_github::{GithubError, GraphqlTransport, enrich};
use thiserror::Error;
use tracing::debug;

use crate::browser::{Browser, BrowserError, open_entries};
use crate::config::{Config, ConfigError};

/// Errors that can abort a run
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git failed or its output could not be understood
    #[error(transparent)]
    Git(#[from] GitError),

    /// Pull request metadata could not be fetched
    #[error(transparent)]
    Github(#[from] GithubError),

    /// A pull request could not be opened
    #[error(transparent)]
    Browser(#[from] BrowserError),

    /// The listing could not be written
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// What a run produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines printed
    pub entries: usize,
    /// Entries that are merged pull requests
    pub pull_requests: usize,
    /// Pull requests with fetched metadata
    pub populated: usize,
    /// Pull requests opened in the browser
    pub opened: usize,
}

/// Run the pipeline for `config`, writing the listing to `out`
///
/// Nothing is written unless every entry was read and metadata was fetched.
///
/// # Errors
///
/// Returns `AppError` if the configuration is invalid, git fails, the
/// repository cannot be resolved, the GraphQL query fails, the output cannot
/// be written, or a pull request cannot be opened.
pub async fn run<T, W>(
    config: &Config,
    transport: &T,
    browser: Arc<dyn Browser>,
    style: Style,
    out: &mut W,
) -> Result<RunSummary, AppError>
where
    T: GraphqlTransport + ?Sized,
    W: Write,
{
    config.validate()?;
    let git = Git::new(config.path.clone());

    let remotes = parse_remotes(&git.remotes().await?);
    let repo = resolve_repository(&remotes)?;
    debug!(repository = %repo, remotes = remotes.len(), "Resolved repository");

    let log = git.first_parent_log(&config.from, &config.to).await?;
    let mut entries = collect_entries(&log)?;
    debug!(entries = entries.len(), "Parsed first-parent log");

    let populated = enrich(transport, &repo, &mut entries).await?;

    for entry in &entries {
        writeln!(out, "{}", entry.render_with(style))?;
    }
    out.flush()?;

    let opened = if config.open {
        open_entries(&entries, browser).await?
    } else {
        0
    };

    let summary = RunSummary {
        entries: entries.len(),
        pull_requests: entries.iter().filter(|e| e.is_pull_request()).count(),
        populated,
        opened,
    };
    debug!(
        from = %config.from,
        to = %config.to,
        entries = summary.entries,
        pull_requests = summary.pull_requests,
        opened = summary.opened,
        "Listed landed changes"
    );
    Ok(summary)
}
