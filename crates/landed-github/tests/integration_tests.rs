// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Integration tests for landed-github
//!
//! The batch pipeline is exercised through a recording transport, and the
//! real HTTP client against a one-shot local server.

use std::sync::Mutex;

use async_trait::async_trait;
use landed_git::{Entry, RepoId, collect_entries};
use landed_github::{
    GithubClient, GithubError, GraphqlRequest, GraphqlResponse, GraphqlTransport, enrich,
};
use serde_json::{Value, json};
use similar_asserts::assert_eq;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// ============================================================================
// Recording transport
// ============================================================================

/// Transport returning a canned response and recording every request
struct RecordingTransport {
    response: Value,
    requests: Mutex<Vec<GraphqlRequest>>,
}

impl RecordingTransport {
    fn new(response: Value) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<GraphqlRequest> {
        self.requests.lock().expect("lock").clone()
    }
}

#[async_trait]
impl GraphqlTransport for RecordingTransport {
    async fn execute(&self, request: &GraphqlRequest) -> Result<GraphqlResponse, GithubError> {
        self.requests.lock().expect("lock").push(request.clone());
        Ok(serde_json::from_value(self.response.clone()).expect("canned response"))
    }
}

fn repo() -> RepoId {
    RepoId {
        owner: "octo".to_string(),
        name: "repo".to_string(),
    }
}

fn sample_entries() -> Vec<Entry> {
    collect_entries(
        "aaa1111\0Merge pull request #42 from octo/feature-x\0HEAD -> main\n\
         bbb2222\0Fix typo\0tag: v1.0\n\
         ccc3333\0Merge pull request #7 from octo/gone\0\n",
    )
    .expect("parse")
}

#[tokio::test]
async fn test_enrich_sends_one_query_for_all_pull_requests() {
    let transport = RecordingTransport::new(json!({
        "data": { "repository": {
            "pr0": { "title": "Add feature X", "url": "https://github.com/octo/repo/pull/42" },
            "pr2": { "title": "Old work", "url": "https://github.com/octo/repo/pull/7" }
        } }
    }));
    let mut entries = sample_entries();

    let populated = enrich(&transport, &repo(), &mut entries).await.expect("enrich");

    assert_eq!(populated, 2);
    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].variables, repo());
    assert!(requests[0].query.contains("pr0: pullRequest(number: 42)"));
    assert!(requests[0].query.contains("pr2: pullRequest(number: 7)"));
    assert!(!requests[0].query.contains("pr1"));

    let lines: Vec<String> = entries.iter().map(Entry::render).collect();
    assert_eq!(
        lines,
        vec![
            "aaa1111 : #42: Add feature X (HEAD -> main)".to_string(),
            "bbb2222 : Fix typo (tag: v1.0)".to_string(),
            "ccc3333 : #7: Old work".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_enrich_without_pull_requests_sends_nothing() {
    let transport = RecordingTransport::new(json!({}));
    let mut entries = collect_entries("bbb2222\0Fix typo\0\nddd4444\0Bump version\0").expect("parse");
    let before = entries.clone();

    let populated = enrich(&transport, &repo(), &mut entries).await.expect("enrich");

    assert_eq!(populated, 0);
    assert!(transport.requests().is_empty());
    assert_eq!(entries, before);
}

#[tokio::test]
async fn test_enrich_missing_pull_request_falls_back_to_branch() {
    let transport = RecordingTransport::new(json!({
        "data": { "repository": {
            "pr0": { "title": "Add feature X", "url": "https://github.com/octo/repo/pull/42" },
            "pr2": null
        } },
        "errors": [{ "type": "NOT_FOUND", "path": ["repository", "pr2"],
                     "message": "Could not resolve to a PullRequest with the number of 7." }]
    }));
    let mut entries = sample_entries();

    let populated = enrich(&transport, &repo(), &mut entries).await.expect("enrich");

    assert_eq!(populated, 1);
    assert_eq!(entries[2].render(), "ccc3333 : #7 (octo/gone)");
    assert_eq!(entries[2].external_url(), None);
}

#[tokio::test]
async fn test_enrich_unexpected_alias_is_fatal() {
    let transport = RecordingTransport::new(json!({
        "data": { "repository": {
            "pr1": { "title": "Not a pull request", "url": "https://github.com/octo/repo/pull/1" }
        } }
    }));
    let mut entries = sample_entries();

    let result = enrich(&transport, &repo(), &mut entries).await;
    assert!(matches!(result, Err(GithubError::UnexpectedAlias { ref alias }) if alias == "pr1"));
}

#[tokio::test]
async fn test_enrich_repository_not_found_is_fatal() {
    let transport = RecordingTransport::new(json!({
        "data": { "repository": null },
        "errors": [{ "type": "NOT_FOUND", "message": "Could not resolve to a Repository with the name 'octo/repo'." }]
    }));
    let mut entries = sample_entries();

    let result = enrich(&transport, &repo(), &mut entries).await;
    match result {
        Err(GithubError::Graphql { messages }) => assert!(messages.contains("octo/repo")),
        other => panic!("Expected Graphql error, got {other:?}"),
    }
}

// ============================================================================
// Real client against a local server
// ============================================================================

/// Serve exactly one HTTP response and hand back the raw request
async fn serve_once(status_line: &'static str, body: String) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let endpoint = format!("http://{}/graphql", listener.local_addr().expect("addr"));

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.expect("write");
        socket.shutdown().await.ok();
        request
    });

    (endpoint, handle)
}

/// Read headers, then as many body bytes as Content-Length announces
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.expect("read");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[tokio::test]
async fn test_client_posts_query_with_bearer_token() {
    let body = json!({
        "data": { "repository": {
            "pr0": { "title": "Add feature X", "url": "https://github.com/octo/repo/pull/42" }
        } }
    })
    .to_string();
    let (endpoint, server) = serve_once("200 OK", body).await;

    let client = GithubClient::new(Some("secret-token".to_string())).with_endpoint(endpoint);
    let mut entries = sample_entries();
    let populated = enrich(&client, &repo(), &mut entries).await.expect("enrich");
    assert_eq!(populated, 1);

    let request = server.await.expect("server task");
    assert!(request.starts_with("POST /graphql "));
    let lower = request.to_ascii_lowercase();
    assert!(lower.contains("authorization: bearer secret-token"));
    assert!(lower.contains("user-agent: landed/"));
    assert!(request.contains("\"variables\":{\"owner\":\"octo\",\"name\":\"repo\"}"));
    assert!(request.contains("pr0: pullRequest(number: 42) { title url }"));
}

#[tokio::test]
async fn test_client_non_success_status() {
    let (endpoint, server) =
        serve_once("401 Unauthorized", r#"{"message":"Bad credentials"}"#.to_string()).await;

    let client = GithubClient::new(Some("wrong".to_string())).with_endpoint(endpoint);
    let mut entries = sample_entries();
    let result = enrich(&client, &repo(), &mut entries).await;
    server.await.expect("server task");

    match result {
        Err(GithubError::Status { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("Bad credentials"));
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
    assert!(entries.iter().all(|e| e.external_url().is_none()));
}

#[tokio::test]
async fn test_client_connection_refused() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let endpoint = format!("http://{}/graphql", listener.local_addr().expect("addr"));
    drop(listener);

    let client = GithubClient::new(Some("token".to_string())).with_endpoint(endpoint);
    let mut entries = sample_entries();
    let result = enrich(&client, &repo(), &mut entries).await;
    assert!(matches!(result, Err(GithubError::Http(_))));
}
