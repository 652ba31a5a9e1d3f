// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! History entry types
//!
//! An [`Entry`] is one line of the rendered history: either a commit made
//! directly on the branch or a merged pull request. Every consumer (renderer,
//! query builder, reconciler, browser opener) treats entries uniformly through
//! the methods on [`Entry`]; only the variants differ in effect.

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

/// How a rendered line should be styled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// No escape sequences
    #[default]
    Plain,
    /// ANSI colors for terminal output
    Colored,
}

/// Pull request metadata fetched from GitHub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestData {
    /// Pull request title
    pub title: String,
    /// Web URL of the pull request
    pub url: String,
}

/// A commit made directly on the first-parent line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectCommit {
    oid: String,
    refs: Vec<String>,
    summary: String,
}

impl DirectCommit {
    /// Create a direct commit entry
    #[must_use]
    pub fn new(oid: impl Into<String>, summary: impl Into<String>, refs: Vec<String>) -> Self {
        Self {
            oid: oid.into(),
            refs,
            summary: summary.into(),
        }
    }

    /// First line of the commit message
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }
}

/// A merge commit created by merging a pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    oid: String,
    refs: Vec<String>,
    number: u64,
    head_ref: String,
    api_data: Option<PullRequestData>,
}

impl PullRequest {
    /// Create a pull request entry with no API data yet
    #[must_use]
    pub fn new(
        oid: impl Into<String>,
        number: u64,
        head_ref: impl Into<String>,
        refs: Vec<String>,
    ) -> Self {
        Self {
            oid: oid.into(),
            refs,
            number,
            head_ref: head_ref.into(),
            api_data: None,
        }
    }

    /// Pull request number
    #[must_use]
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Branch name taken from the merge commit subject
    #[must_use]
    pub fn head_ref(&self) -> &str {
        &self.head_ref
    }

    /// Metadata fetched from GitHub, if any
    #[must_use]
    pub fn api_data(&self) -> Option<&PullRequestData> {
        self.api_data.as_ref()
    }
}

/// One item of first-parent history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A commit made directly on the branch
    DirectCommit(DirectCommit),
    /// A merged pull request
    PullRequest(PullRequest),
}

impl Entry {
    /// Abbreviated commit hash
    #[must_use]
    pub fn oid(&self) -> &str {
        match self {
            Self::DirectCommit(c) => &c.oid,
            Self::PullRequest(pr) => &pr.oid,
        }
    }

    /// Ref names decorating this commit, in the order git reported them
    #[must_use]
    pub fn refs(&self) -> &[String] {
        match self {
            Self::DirectCommit(c) => &c.refs,
            Self::PullRequest(pr) => &pr.refs,
        }
    }

    /// Check if this entry is a merged pull request
    #[must_use]
    pub fn is_pull_request(&self) -> bool {
        matches!(self, Self::PullRequest(_))
    }

    /// Render this entry as a plain line of text
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(Style::Plain)
    }

    /// Render this entry with the given style
    ///
    /// Pull requests show the fetched title when available and fall back to
    /// the branch name from the merge commit otherwise.
    #[must_use]
    pub fn render_with(&self, style: Style) -> String {
        let mut line = format!("{} : ", paint(self.oid(), style, |s| s.bright_black()));
        match self {
            Self::DirectCommit(c) => {
                line.push_str(&paint(&c.summary, style, |s| s.bold()));
            }
            Self::PullRequest(pr) => {
                line.push('#');
                line.push_str(&paint(&pr.number.to_string(), style, |s| {
                    s.bold().green()
                }));
                match &pr.api_data {
                    Some(data) => {
                        line.push_str(": ");
                        line.push_str(&paint(&data.title, style, |s| s.bold()));
                    }
                    None => {
                        line.push_str(" (");
                        line.push_str(&paint(&pr.head_ref, style, |s| s.bright_black()));
                        line.push(')');
                    }
                }
            }
        }
        line.push_str(&self.ref_suffix(style));
        line
    }

    /// Parenthesized, comma-joined ref names, or an empty string
    fn ref_suffix(&self, style: Style) -> String {
        let refs = self.refs();
        if refs.is_empty() {
            return String::new();
        }
        let painted: Vec<String> = refs
            .iter()
            .map(|r| paint(r, style, |s| s.yellow()))
            .collect();
        format!(" ({})", painted.join(", "))
    }

    /// GraphQL selection this entry contributes to a batch query
    ///
    /// Direct commits need no remote data and contribute an empty string.
    #[must_use]
    pub fn query_fragment(&self, alias: &str) -> String {
        match self {
            Self::DirectCommit(_) => String::new(),
            Self::PullRequest(pr) => {
                format!(" {alias}: pullRequest(number: {}) {{ title url }}", pr.number)
            }
        }
    }

    /// Store metadata fetched for this entry
    ///
    /// Returns `true` if the data was stored. Direct commits ignore it, and a
    /// pull request keeps the first data it was given.
    pub fn accept_response(&mut self, data: PullRequestData) -> bool {
        match self {
            Self::PullRequest(pr) if pr.api_data.is_none() => {
                pr.api_data = Some(data);
                true
            }
            _ => false,
        }
    }

    /// Web page to open for this entry, if it has one
    #[must_use]
    pub fn external_url(&self) -> Option<&str> {
        match self {
            Self::PullRequest(pr) => pr.api_data.as_ref().map(|d| d.url.as_str()),
            Self::DirectCommit(_) => None,
        }
    }
}

impl From<DirectCommit> for Entry {
    fn from(commit: DirectCommit) -> Self {
        Self::DirectCommit(commit)
    }
}

impl From<PullRequest> for Entry {
    fn from(pr: PullRequest) -> Self {
        Self::PullRequest(pr)
    }
}

fn paint(text: &str, style: Style, f: impl FnOnce(&str) -> ColoredString) -> String {
    match style {
        Style::Plain => text.to_string(),
        Style::Colored => f(text).to_string(),
    }
}
