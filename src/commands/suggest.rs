//! `taskhint suggest` command - query a running service
//!
//! Unlike the lenient client calls used by forms, failures here are
//! reported so the exit code reflects whether the service answered.

use std::path::Path;
use std::time::Duration;

use taskhint::client::SuggestionClient;
use taskhint_core::config::ServiceConfig;
use taskhint_core::error::Result;

use super::format::output_similar;
use super::read_task_values;
use crate::cli::Cli;

pub async fn execute(
    cli: &Cli,
    config: &ServiceConfig,
    text: &str,
    tasks: Option<&Path>,
    server: &str,
) -> Result<()> {
    let existing_tasks = match tasks {
        Some(path) => read_task_values(path)?,
        None => Vec::new(),
    };

    let timeout = Duration::from_millis(config.server.request_timeout_ms);
    let client = SuggestionClient::new(server, timeout)?;
    let outcome = client.fetch_similar(text, "", &existing_tasks).await?;

    output_similar(cli, outcome)
}
