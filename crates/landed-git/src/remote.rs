// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! GitHub repository identity from git remotes

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::GitError;

/// Remote URLs pointing at github.com over HTTPS or SSH
///
/// Groups:
/// 1. owner
/// 2. repository name
static GITHUB_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https://|git@)github\.com(?::|/)([^/]+)/([^.]+)\.git")
        .expect("Invalid GitHub URL regex")
});

/// A configured git remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    /// Remote name, e.g. `origin`
    pub name: String,
    /// Remote URL
    pub url: String,
}

/// Owner and name of a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoId {
    /// Account or organization owning the repository
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoId {
    /// Extract the repository identity from a GitHub remote URL
    ///
    /// Returns `None` for URLs that do not point at github.com.
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        let caps = GITHUB_URL_REGEX.captures(url)?;
        Some(Self {
            owner: caps[1].to_string(),
            name: caps[2].to_string(),
        })
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Parse the output of `git remote -v`
///
/// Each remote is listed once for fetch and once for push; the first URL
/// seen for a name is kept.
#[must_use]
pub fn parse_remotes(output: &str) -> Vec<Remote> {
    let mut remotes: Vec<Remote> = Vec::new();
    for line in output.lines() {
        let mut parts = line.split_whitespace();
        let (Some(name), Some(url)) = (parts.next(), parts.next()) else {
            continue;
        };
        if remotes.iter().any(|r| r.name == name) {
            continue;
        }
        remotes.push(Remote {
            name: name.to_string(),
            url: url.to_string(),
        });
    }
    remotes
}

/// Pick the GitHub repository the history belongs to
///
/// Prefers a remote named `upstream`, then `origin`, then the only GitHub
/// remote if there is exactly one.
///
/// # Errors
///
/// Returns `GitError::RepositoryUnresolved` if no remote points at GitHub, or
/// if several do and none of them is `upstream` or `origin`.
pub fn resolve_repository(remotes: &[Remote]) -> Result<RepoId, GitError> {
    let github: Vec<(&str, RepoId)> = remotes
        .iter()
        .filter_map(|r| RepoId::from_url(&r.url).map(|id| (r.name.as_str(), id)))
        .collect();

    let named = |wanted: &str| {
        github
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, id)| id.clone())
    };

    if let Some(id) = named("upstream").or_else(|| named("origin")) {
        return Ok(id);
    }

    match github.as_slice() {
        [(_, only)] => Ok(only.clone()),
        _ => Err(GitError::RepositoryUnresolved {
            remotes: remotes
                .iter()
                .map(|r| format!("{}\t{}", r.name, r.url))
                .collect::<Vec<_>>()
                .join("\n"),
        }),
    }
}
