// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! landed-github: Pull request metadata for landed
//!
//! This library crate fetches titles and URLs for the pull request entries of
//! a history range from the GitHub GraphQL API, using one batched query per
//! range.
//!
//! # Example
//!
//! ```no_run
//! use landed_git::{RepoId, collect_entries};
//! use landed_github::{GithubClient, enrich};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut entries = collect_entries("abc1234\0Merge pull request #1 from octo/x\0")?;
//! let repo = RepoId { owner: "octo".into(), name: "repo".into() };
//! let client = GithubClient::new(std::env::var("GITHUB_TOKEN").ok());
//!
//! enrich(&client, &repo, &mut entries).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod query;

pub use client::{
    DEFAULT_ENDPOINT, GithubClient, GraphqlError, GraphqlRequest, GraphqlResponse,
    GraphqlTransport, ResponseData,
};
pub use error::GithubError;
pub use query::{BatchQuery, alias_for, enrich};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::client::{GithubClient, GraphqlTransport};
    pub use crate::error::GithubError;
    pub use crate::query::{BatchQuery, enrich};
}
