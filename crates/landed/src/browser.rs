// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Opening pull requests in a web browser

use std::io;
use std::sync::Arc;

use landed_git::Entry;
use thiserror::Error;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, warn};

/// Errors that can occur while opening pull requests
#[derive(Debug, Error)]
pub enum BrowserError {
    /// The system opener could not be launched
    #[error("Failed to open {url}: {source}")]
    Open {
        /// The URL that failed to open
        url: String,
        /// The underlying launch error
        #[source]
        source: io::Error,
    },

    /// An opener task panicked or was cancelled
    #[error("Browser task failed: {0}")]
    Join(#[from] JoinError),
}

/// Something that can show a URL to the user
pub trait Browser: Send + Sync {
    /// Open the URL, returning once the opener has been launched
    ///
    /// # Errors
    ///
    /// Returns `BrowserError::Open` if the URL could not be handed off.
    fn open(&self, url: &str) -> Result<(), BrowserError>;
}

/// The platform's default browser
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        open::that(url).map_err(|source| BrowserError::Open {
            url: url.to_string(),
            source,
        })
    }
}

/// Open every entry that has an external URL
///
/// All opens are launched concurrently and all are awaited, even when some
/// fail. Returns the number of URLs opened.
///
/// # Errors
///
/// Returns the first failure once every open has settled.
pub async fn open_entries(entries: &[Entry], browser: Arc<dyn Browser>) -> Result<usize, BrowserError> {
    let mut tasks = JoinSet::new();

    for url in entries.iter().filter_map(Entry::external_url) {
        let url = url.to_string();
        let browser = Arc::clone(&browser);
        tasks.spawn_blocking(move || {
            debug!(url = %url, "Opening pull request");
            browser.open(&url)
        });
    }

    let mut opened = 0;
    let mut first_error = None;
    while let Some(joined) = tasks.join_next().await {
        let result = joined.map_err(BrowserError::from).and_then(|r| r);
        match result {
            Ok(()) => opened += 1,
            Err(e) => {
                warn!(error = %e, "Failed to open pull request");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(opened),
    }
}
