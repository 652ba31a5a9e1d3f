// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! landed: list the commits and pull requests that landed between two revisions
//!
//! Prints one line per first-parent commit, with merged pull requests titled
//! from the GitHub GraphQL API.

use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use landed::{Config, SystemBrowser};
use landed_github::GithubClient;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Usage errors exit with the same status as every other failure
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Logs go to stderr so stdout only carries the listing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_level().into()))
        .with_writer(std::io::stderr)
        .init();

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> anyhow::Result<()> {
    debug!(path = %config.path.display(), from = %config.from, to = %config.to, "Starting landed");

    let client = GithubClient::new(config.token.clone()).with_endpoint(config.endpoint.as_str());
    let stdout = std::io::stdout();
    let style = config.style(stdout.is_terminal());
    let mut out = stdout.lock();

    let summary = landed::run(config, &client, Arc::new(SystemBrowser), style, &mut out).await?;
    debug!(?summary, "Finished");
    Ok(())
}
