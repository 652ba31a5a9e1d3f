// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! landed-git: First-parent history processing for landed
//!
//! This library crate reads the first-parent history between two revisions
//! from a local repository and classifies each commit as a direct commit or
//! a merged pull request.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use landed_git::{Git, collect_entries};
//!
//! # async fn example() -> Result<(), landed_git::GitError> {
//! let git = Git::new(".");
//! let output = git.first_parent_log("v1.0.0", "main").await?;
//!
//! for entry in collect_entries(&output)? {
//!     println!("{}", entry.render());
//! }
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod entry;
pub mod error;
pub mod parser;
pub mod remote;

pub use command::Git;
pub use entry::{DirectCommit, Entry, PullRequest, PullRequestData, Style};
pub use error::GitError;
pub use parser::{LogEntries, collect_entries, parse_line, parse_log, parse_refs};
pub use remote::{Remote, RepoId, parse_remotes, resolve_repository};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::command::Git;
    pub use crate::entry::{Entry, PullRequestData, Style};
    pub use crate::error::GitError;
    pub use crate::parser::collect_entries;
    pub use crate::remote::{RepoId, resolve_repository};
}
