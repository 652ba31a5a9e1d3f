// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Batched pull request queries
//!
//! All pull requests in a range are fetched with a single GraphQL query. Each
//! pull request entry contributes one aliased `pullRequest` selection, and the
//! aliases are used to route the response fragments back to their entries.
//!
//! # Example
//!
//! ```
//! use landed_git::{DirectCommit, Entry, PullRequest};
//! use landed_github::BatchQuery;
//!
//! let entries: Vec<Entry> = vec![
//!     PullRequest::new("abc1234", 42, "octo/feature-x", vec![]).into(),
//!     DirectCommit::new("def4567", "Fix typo", vec![]).into(),
//! ];
//!
//! let batch = BatchQuery::build(&entries).expect("one pull request");
//! assert_eq!(batch.len(), 1);
//! assert!(batch.text().contains("pr0: pullRequest(number: 42)"));
//! ```

use std::collections::HashMap;

use landed_git::{Entry, PullRequestData, RepoId};
use serde_json::{Map, Value};
use tracing::debug;

use crate::client::{GraphqlRequest, GraphqlTransport};
use crate::error::GithubError;

/// Alias of the entry at `index` within one query
#[must_use]
pub fn alias_for(index: usize) -> String {
    format!("pr{index}")
}

/// A composed query plus the alias-to-entry mapping needed to read its answer
#[derive(Debug, Clone)]
pub struct BatchQuery {
    text: String,
    aliases: HashMap<String, usize>,
}

impl BatchQuery {
    /// Compose one query covering every entry that needs remote data
    ///
    /// Returns `None` if no entry contributes a selection, in which case there
    /// is nothing to ask GitHub.
    #[must_use]
    pub fn build(entries: &[Entry]) -> Option<Self> {
        let mut selections = String::new();
        let mut aliases = HashMap::new();

        for (index, entry) in entries.iter().enumerate() {
            let alias = alias_for(index);
            let fragment = entry.query_fragment(&alias);
            if fragment.is_empty() {
                continue;
            }
            selections.push_str(&fragment);
            aliases.insert(alias, index);
        }

        if aliases.is_empty() {
            return None;
        }

        let text = format!(
            "query($owner: String!, $name: String!) {{ \
             repository(owner: $owner, name: $name) {{{selections} }} }}"
        );
        Some(Self { text, aliases })
    }

    /// The GraphQL query text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of aliased selections in the query
    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Check if the query has no selections (never true for a built query)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Entry index an alias was assigned to
    #[must_use]
    pub fn index_of(&self, alias: &str) -> Option<usize> {
        self.aliases.get(alias).copied()
    }

    /// Hand each response fragment to the entry it was requested for
    ///
    /// `repository` is the `data.repository` object of the response. A `null`
    /// fragment means the pull request could not be found; that entry keeps
    /// rendering its branch name. Returns the number of entries populated.
    ///
    /// # Errors
    ///
    /// Returns `GithubError::UnexpectedAlias` if the response names an alias
    /// this query did not ask for, and `GithubError::InvalidFragment` if a
    /// fragment lacks `title` or `url`.
    pub fn reconcile(
        &self,
        entries: &mut [Entry],
        repository: Map<String, Value>,
    ) -> Result<usize, GithubError> {
        let mut populated = 0;

        for (alias, fragment) in repository {
            let Some(entry) = self
                .index_of(&alias)
                .and_then(|index| entries.get_mut(index))
            else {
                return Err(GithubError::UnexpectedAlias { alias });
            };

            if fragment.is_null() {
                debug!(alias = %alias, "Pull request not found, keeping branch name");
                continue;
            }

            let data: PullRequestData = serde_json::from_value(fragment)
                .map_err(|source| GithubError::InvalidFragment { alias, source })?;

            if entry.accept_response(data) {
                populated += 1;
            }
        }

        Ok(populated)
    }
}

/// Fetch titles and URLs for every pull request entry in one round trip
///
/// Nothing is sent when the entries contain no pull requests. Returns the
/// number of entries populated.
///
/// # Errors
///
/// Returns `GithubError` if the request fails, the response carries no
/// repository data, or the response does not match the query.
pub async fn enrich<T>(
    transport: &T,
    repo: &RepoId,
    entries: &mut [Entry],
) -> Result<usize, GithubError>
where
    T: GraphqlTransport + ?Sized,
{
    let Some(batch) = BatchQuery::build(entries) else {
        debug!("No pull requests in range, skipping GraphQL query");
        return Ok(0);
    };

    let request = GraphqlRequest::new(batch.text(), repo.clone());
    let response = transport.execute(&request).await?;
    let repository = response.into_repository()?;

    let populated = batch.reconcile(entries, repository)?;
    debug!(
        requested = batch.len(),
        populated,
        repository = %repo,
        "Fetched pull request metadata"
    );
    Ok(populated)
}
