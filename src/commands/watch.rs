//! `taskhint watch` command - debounced suggestions for typed input
//!
//! Each stdin line stands in for the current contents of a title field.
//! Lookups fire once input has been quiet for the delay, and only the
//! latest input's suggestions are printed.

use std::path::Path;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};

use taskhint::client::{DebouncedSuggester, SuggestionClient};
use taskhint_core::config::ServiceConfig;
use taskhint_core::error::Result;
use taskhint_core::ranking::Suggestion;

use super::format::human_line;
use super::read_task_values;
use crate::cli::{Cli, OutputFormat};

fn print_latest(cli: &Cli, suggestions: &[Suggestion]) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(suggestions)?);
        }
        OutputFormat::Human => {
            for (i, suggestion) in suggestions.iter().enumerate() {
                println!("{}", human_line(i + 1, suggestion));
            }
            if !cli.quiet {
                println!("--");
            }
        }
    }
    Ok(())
}

pub async fn execute(
    cli: &Cli,
    config: &ServiceConfig,
    tasks: Option<&Path>,
    server: &str,
    delay: Duration,
) -> Result<()> {
    let existing_tasks = match tasks {
        Some(path) => read_task_values(path)?,
        None => Vec::new(),
    };

    let timeout = Duration::from_millis(config.server.request_timeout_ms);
    let client = SuggestionClient::new(server, timeout)?;
    let (suggester, mut results) = DebouncedSuggester::new(client, delay);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => suggester.input(line.trim(), "", existing_tasks.clone()),
                None => break,
            },
            changed = results.changed() => {
                if changed.is_err() {
                    break;
                }
                let latest = results.borrow_and_update().clone();
                print_latest(cli, &latest)?;
            }
        }
    }

    // Input closed: let the last lookup finish before exiting
    suggester.settle().await;
    if results.has_changed().unwrap_or(false) {
        let latest = results.borrow_and_update().clone();
        print_latest(cli, &latest)?;
    }

    Ok(())
}
