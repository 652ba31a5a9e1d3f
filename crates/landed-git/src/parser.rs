// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! First-parent log parsing
//!
//! This module turns the output of
//! `git log --format=format:%h%x00%s%x00%D` into typed [`Entry`] values.
//! Each line carries three NUL-separated fields: the abbreviated hash, the
//! subject line, and the ref decoration.

use std::iter::{Enumerate, Filter};
use std::str::Lines;
use std::sync::LazyLock;

use regex::Regex;

use crate::entry::{DirectCommit, Entry, PullRequest};
use crate::error::GitError;

/// Field separator used in the log format
pub const FIELD_SEPARATOR: char = '\0';

/// Subject of the merge commits GitHub creates for pull requests
///
/// Groups:
/// 1. pull request number (ASCII digits only)
/// 2. head ref (`owner/branch`)
static MERGE_SUBJECT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Merge pull request #([0-9]+) from (.*)").expect("Invalid merge subject regex")
});

/// Separator between decorations, with optional surrounding whitespace
static REF_SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*").expect("Invalid ref separator regex"));

/// Split a ref decoration string into ref names
///
/// `"HEAD -> main, origin/main"` becomes `["HEAD -> main", "origin/main"]`.
/// Empty elements are dropped, so an undecorated commit has no refs.
#[must_use]
pub fn parse_refs(decoration: &str) -> Vec<String> {
    REF_SEPARATOR_REGEX
        .split(decoration.trim())
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a single log line into an entry
///
/// `line_number` is 1-based and only used for error reporting.
///
/// # Errors
///
/// Returns `GitError::MalformedLogLine` if the line does not contain exactly
/// three fields, or `GitError::InvalidPullRequestNumber` if a merge subject
/// carries a number that does not fit in a `u64`.
pub fn parse_line(line_number: usize, line: &str) -> Result<Entry, GitError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [oid, subject, decoration] = fields.as_slice() else {
        return Err(GitError::MalformedLogLine {
            line: line_number,
            fields: fields.len(),
        });
    };

    let refs = parse_refs(decoration);

    if let Some(caps) = MERGE_SUBJECT_REGEX.captures(subject) {
        let digits = &caps[1];
        let number = digits
            .parse::<u64>()
            .map_err(|_| GitError::InvalidPullRequestNumber {
                line: line_number,
                number: digits.to_string(),
            })?;
        return Ok(PullRequest::new(*oid, number, &caps[2], refs).into());
    }

    Ok(DirectCommit::new(*oid, *subject, refs).into())
}

type NonEmptyLines<'a> = Filter<Enumerate<Lines<'a>>, fn(&(usize, &'a str)) -> bool>;

/// Iterator over the entries of a log, in log order
///
/// Produced by [`parse_log`]. Blank lines are skipped; every other line yields
/// exactly one item.
pub struct LogEntries<'a> {
    lines: NonEmptyLines<'a>,
}

impl Iterator for LogEntries<'_> {
    type Item = Result<Entry, GitError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines
            .next()
            .map(|(index, line)| parse_line(index + 1, line))
    }
}

fn is_non_empty(line: &(usize, &str)) -> bool {
    !line.1.is_empty()
}

/// Parse log output lazily, one entry per non-empty line
#[must_use]
pub fn parse_log(output: &str) -> LogEntries<'_> {
    LogEntries {
        lines: output.lines().enumerate().filter(is_non_empty as fn(&(usize, &str)) -> bool),
    }
}

/// Parse all of the log output, stopping at the first malformed line
///
/// # Errors
///
/// Returns the first error produced by [`parse_line`].
pub fn collect_entries(output: &str) -> Result<Vec<Entry>, GitError> {
    parse_log(output).collect()
}
