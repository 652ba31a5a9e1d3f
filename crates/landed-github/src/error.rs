// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for landed-github

use thiserror::Error;

/// Errors that can occur while fetching pull request metadata
#[derive(Debug, Error)]
pub enum GithubError {
    /// No token was configured but a query had to be sent
    #[error("No GitHub token configured. Set GITHUB_TOKEN or pass --token.")]
    MissingToken,

    /// The HTTP request could not be completed
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// GitHub answered with a non-success status
    #[error("GitHub responded with status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as text
        body: String,
    },

    /// The GraphQL response carried errors and no repository data
    #[error("GitHub GraphQL query failed: {messages}")]
    Graphql {
        /// Error messages reported by the server, one per line
        messages: String,
    },

    /// The GraphQL response carried neither data nor errors
    #[error("GitHub GraphQL response contained no repository data")]
    MissingData,

    /// The response named an alias that was not part of the query
    #[error("Unexpected response name: {alias}")]
    UnexpectedAlias {
        /// The unrecognized alias
        alias: String,
    },

    /// A pull request fragment did not have the requested shape
    #[error("Malformed pull request data for {alias}: {source}")]
    InvalidFragment {
        /// Alias of the malformed fragment
        alias: String,
        /// The deserialization error
        #[source]
        source: serde_json::Error,
    },
}
