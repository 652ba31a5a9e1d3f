// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! GitHub GraphQL transport
//!
//! [`GraphqlTransport`] is the seam between the batch query logic and the
//! network. [`GithubClient`] is the real implementation, posting queries to
//! the GitHub GraphQL endpoint with a bearer token.

use async_trait::async_trait;
use landed_git::RepoId;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::GithubError;

/// Public GitHub GraphQL endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

/// A GraphQL query with its variables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphqlRequest {
    /// Query text, collapsed onto one line
    pub query: String,
    /// `$owner` and `$name` variables
    pub variables: RepoId,
}

impl GraphqlRequest {
    /// Create a request, collapsing the query's whitespace
    #[must_use]
    pub fn new(query: &str, variables: RepoId) -> Self {
        Self {
            query: query.split_whitespace().collect::<Vec<_>>().join(" "),
            variables,
        }
    }
}

/// An error entry of a GraphQL response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphqlError {
    /// Human-readable message
    pub message: String,
    /// Error classification, e.g. `NOT_FOUND`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Path of the field the error applies to
    #[serde(default)]
    pub path: Vec<Value>,
}

/// The `data` member of a response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResponseData {
    /// Alias to pull request fragment, `null` for pull requests not found
    #[serde(default)]
    pub repository: Option<Map<String, Value>>,
}

/// A GraphQL response body
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GraphqlResponse {
    /// Query result, absent when the whole query failed
    #[serde(default)]
    pub data: Option<ResponseData>,
    /// Errors reported alongside (or instead of) the data
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl GraphqlResponse {
    /// Extract the `data.repository` object
    ///
    /// Errors accompanying usable data (typically a pull request that does
    /// not exist) are logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns `GithubError::Graphql` if the response carries errors and no
    /// repository data, or `GithubError::MissingData` if it carries neither.
    pub fn into_repository(self) -> Result<Map<String, Value>, GithubError> {
        let repository = self.data.and_then(|d| d.repository);

        match repository {
            Some(repository) => {
                for error in &self.errors {
                    warn!(
                        kind = error.kind.as_deref().unwrap_or("UNKNOWN"),
                        message = %error.message,
                        "GraphQL error"
                    );
                }
                Ok(repository)
            }
            None if self.errors.is_empty() => Err(GithubError::MissingData),
            None => Err(GithubError::Graphql {
                messages: self
                    .errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            }),
        }
    }
}

/// Something that can execute a GraphQL request
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    /// Send one request and wait for its response
    async fn execute(&self, request: &GraphqlRequest) -> Result<GraphqlResponse, GithubError>;
}

/// GraphQL client for the GitHub API
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl GithubClient {
    /// Create a client for the public GitHub endpoint
    ///
    /// The token is only required once a query is actually sent.
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token,
        }
    }

    /// Send queries to a different endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The endpoint queries are sent to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GraphqlTransport for GithubClient {
    async fn execute(&self, request: &GraphqlRequest) -> Result<GraphqlResponse, GithubError> {
        let token = self.token.as_deref().ok_or(GithubError::MissingToken)?;

        debug!(
            endpoint = %self.endpoint,
            query = %request.query,
            variables = %request.variables,
            "Executing GraphQL query"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("bearer {token}"))
            .header(USER_AGENT, concat!("landed/", env!("CARGO_PKG_VERSION")))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GithubError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: GraphqlResponse = response.json().await?;
        debug!(response = ?body, "GraphQL response");
        Ok(body)
    }
}
