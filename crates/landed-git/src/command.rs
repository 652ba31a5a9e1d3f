// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Running the git binary
//!
//! History is read by spawning `git` in the repository's working directory
//! and capturing its standard output. Standard error is passed through so the
//! user sees git's own diagnostics.

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::debug;

use crate::error::GitError;

/// Log format producing `hash NUL subject NUL decoration` per commit
pub const LOG_FORMAT: &str = "--format=format:%h%x00%s%x00%D";

/// A git working directory
#[derive(Debug, Clone)]
pub struct Git {
    workdir: PathBuf,
}

impl Git {
    /// Run git commands inside `workdir`
    #[must_use]
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// The directory git runs in
    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run git with the given arguments and return its standard output
    ///
    /// # Errors
    ///
    /// Returns `GitError::Spawn` if git cannot be started,
    /// `GitError::CommandFailed` or `GitError::Terminated` if it does not exit
    /// successfully, and `GitError::InvalidOutput` if stdout is not UTF-8.
    pub async fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let joined = args.join(" ");
        debug!(args = %joined, workdir = %self.workdir.display(), "Running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|source| GitError::Spawn {
                args: joined.clone(),
                source,
            })?;

        check_status(&joined, output.status)?;

        String::from_utf8(output.stdout).map_err(|source| GitError::InvalidOutput {
            args: joined,
            source,
        })
    }

    /// List configured remotes (`git remote -v`)
    ///
    /// # Errors
    ///
    /// Returns `GitError` if git fails.
    pub async fn remotes(&self) -> Result<String, GitError> {
        self.run(&["remote", "-v"]).await
    }

    /// First-parent log of the commits reachable from `to` but not `from`
    ///
    /// Newest commits come first, as git prints them.
    ///
    /// # Errors
    ///
    /// Returns `GitError` if git fails, e.g. because a revision is unknown.
    pub async fn first_parent_log(&self, from: &str, to: &str) -> Result<String, GitError> {
        let exclude = format!("^{from}");
        let output = self
            .run(&["log", "--first-parent", to, &exclude, LOG_FORMAT, "--"])
            .await?;
        debug!(
            bytes = output.len(),
            lines = output.lines().count(),
            "Read first-parent log"
        );
        Ok(output)
    }
}

fn check_status(args: &str, status: ExitStatus) -> Result<(), GitError> {
    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(GitError::CommandFailed {
            args: args.to_string(),
            code,
        }),
        None => Err(GitError::Terminated {
            args: args.to_string(),
            signal: exit_signal(status),
        }),
    }
}

#[cfg(unix)]
fn exit_signal(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: ExitStatus) -> Option<i32> {
    None
}
