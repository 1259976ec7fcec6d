//! `taskhint category` command

use taskhint_core::config::ServiceConfig;
use taskhint_core::error::Result;
use taskhint_core::request::CategoryRequest;
use taskhint_core::service::SuggestionService;

use super::format::output_category;
use crate::cli::Cli;

pub fn execute(cli: &Cli, config: ServiceConfig, title: &str, description: &str) -> Result<()> {
    // The catalog plays no part in categorizing
    let service = SuggestionService::new(config, Vec::new());
    let category = service.category(&CategoryRequest {
        title: title.to_string(),
        description: description.to_string(),
    });
    output_category(cli, category)
}
