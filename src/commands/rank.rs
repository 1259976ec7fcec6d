//! `taskhint rank` command - rank items offline
//!
//! Uses the same `SuggestionService` as the HTTP handler, so results match
//! what `POST /api/suggestions/similar` would return for the same input.

use std::path::Path;

use taskhint_core::config::ServiceConfig;
use taskhint_core::error::{Result, SuggestError};
use taskhint_core::request::SimilarRequest;
use taskhint_core::service::SuggestionService;

use super::format::output_similar;
use super::read_tasks;
use crate::cli::Cli;

pub fn execute(
    cli: &Cli,
    mut config: ServiceConfig,
    text: &str,
    tasks: Option<&Path>,
    top_k: Option<usize>,
) -> Result<()> {
    if let Some(top_k) = top_k {
        if top_k == 0 {
            return Err(SuggestError::UsageError(
                "--top-k must be at least 1".to_string(),
            ));
        }
        config.ranking.top_k = top_k;
    }

    let existing_tasks = match tasks {
        Some(path) => read_tasks(path)?,
        None => Vec::new(),
    };

    let service = SuggestionService::from_config(config)?;
    let outcome = service.similar(&SimilarRequest {
        text: text.to_string(),
        existing_tasks,
    });

    output_similar(cli, outcome)
}
