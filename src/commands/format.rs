//! Shared output for suggestion results
//!
//! JSON output reuses the HTTP response envelopes so scripts see the same
//! shape whether they call the service or the CLI.

use taskhint::server::dto::{CategoryResponse, SimilarResponse};
use taskhint_core::error::{Result, SuggestError};
use taskhint_core::ranking::Suggestion;
use taskhint_core::service::SimilarOutcome;

use crate::cli::{Cli, OutputFormat};

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| SuggestError::failed("serialize output", e))?;
    println!("{}", text);
    Ok(())
}

/// One line per suggestion: rank, score, title, then category if known
pub fn human_line(rank: usize, suggestion: &Suggestion) -> String {
    let mut line = format!(
        "{:>2}. {:.3}  {}",
        rank,
        suggestion.similarity_score,
        suggestion.title
    );
    if let Some(category) = &suggestion.category {
        line.push_str(&format!("  [{}]", category));
    }
    line
}

pub fn output_similar(cli: &Cli, outcome: SimilarOutcome) -> Result<()> {
    match cli.format {
        OutputFormat::Json => print_json(&SimilarResponse::from(outcome)),
        OutputFormat::Human => {
            if outcome.suggestions.is_empty() && outcome.recommendations.is_empty() {
                if !cli.quiet {
                    println!("No similar items found");
                }
                return Ok(());
            }
            for (i, suggestion) in outcome.suggestions.iter().enumerate() {
                println!("{}", human_line(i + 1, suggestion));
            }
            if !outcome.recommendations.is_empty() {
                if !cli.quiet {
                    println!();
                    println!("Recommended:");
                }
                for (i, suggestion) in outcome.recommendations.iter().enumerate() {
                    println!("{}", human_line(i + 1, suggestion));
                }
            }
            if let Some(category) = &outcome.auto_category {
                if !cli.quiet {
                    println!();
                    println!("Suggested category: {}", category);
                }
            }
            Ok(())
        }
    }
}

pub fn output_category(cli: &Cli, category: String) -> Result<()> {
    match cli.format {
        OutputFormat::Json => print_json(&CategoryResponse::new(category)),
        OutputFormat::Human => {
            println!("{}", category);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_line() {
        let suggestion = Suggestion {
            title: "Buy milk and eggs".to_string(),
            description: None,
            category: Some("shopping".to_string()),
            priority: None,
            similar_habits: vec![],
            similarity_score: 0.5,
        };
        assert_eq!(
            human_line(1, &suggestion),
            " 1. 0.500  Buy milk and eggs  [shopping]"
        );
    }
}
