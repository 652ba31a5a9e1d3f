// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for landed-git

use thiserror::Error;

/// Errors that can occur while reading history from a git repository
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary could not be started
    #[error("Failed to run git {args}: {source}")]
    Spawn {
        /// The arguments passed to git
        args: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// git exited with a non-zero status
    #[error("git {args} exited with status {code}")]
    CommandFailed {
        /// The arguments passed to git
        args: String,
        /// The exit code reported by the process
        code: i32,
    },

    /// git was terminated by a signal
    #[error("git {args} was killed by {}", describe_signal(.signal))]
    Terminated {
        /// The arguments passed to git
        args: String,
        /// The terminating signal, when the platform reports one
        signal: Option<i32>,
    },

    /// git produced output that is not valid UTF-8
    #[error("git {args} produced non-UTF-8 output: {source}")]
    InvalidOutput {
        /// The arguments passed to git
        args: String,
        /// The decoding error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A log line did not split into hash, subject and decoration
    #[error("Malformed log line {line}: expected 3 NUL-separated fields, found {fields}")]
    MalformedLogLine {
        /// 1-based line number within the log output
        line: usize,
        /// Number of fields actually found
        fields: usize,
    },

    /// A pull request number did not fit in an integer
    #[error("Malformed log line {line}: invalid pull request number {number}")]
    InvalidPullRequestNumber {
        /// 1-based line number within the log output
        line: usize,
        /// The captured digits
        number: String,
    },

    /// No remote identifies a single GitHub repository
    #[error("Unable to determine GitHub repository from remotes.\n{remotes}")]
    RepositoryUnresolved {
        /// The remotes that were considered, one per line
        remotes: String,
    },
}

fn describe_signal(signal: &Option<i32>) -> String {
    match *signal {
        Some(1) => "SIGHUP".to_string(),
        Some(2) => "SIGINT".to_string(),
        Some(3) => "SIGQUIT".to_string(),
        Some(6) => "SIGABRT".to_string(),
        Some(9) => "SIGKILL".to_string(),
        Some(13) => "SIGPIPE".to_string(),
        Some(15) => "SIGTERM".to_string(),
        Some(n) => format!("signal {n}"),
        None => "an unknown signal".to_string(),
    }
}
