//! Request-scoped suggestion operations
//!
//! `SuggestionService` holds only read-only state (config and catalog), so a
//! single instance can be shared by every concurrent request.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::candidate::{Candidate, CandidateIndex};
use crate::catalog;
use crate::category::suggest_category;
use crate::config::ServiceConfig;
use crate::error::Result;
use crate::ranking::{auto_category, rank, Suggestion};
use crate::request::{CategoryRequest, SimilarRequest};
use crate::trace_time;

/// Ranked suggestions for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarOutcome {
    /// Matches among the caller's own items, never more than they sent
    pub suggestions: Vec<Suggestion>,
    /// Matches from the recommendation catalog, ranked separately
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<Suggestion>,
    /// Best match's category when it scored above the auto-category threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_category: Option<String>,
}

impl SimilarOutcome {
    pub fn empty() -> Self {
        Self {
            suggestions: Vec::new(),
            recommendations: Vec::new(),
            auto_category: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SuggestionService {
    config: ServiceConfig,
    catalog: Vec<Candidate>,
}

impl SuggestionService {
    pub fn new(config: ServiceConfig, catalog: Vec<Candidate>) -> Self {
        Self { config, catalog }
    }

    /// Build from config, loading the configured catalog file if any
    pub fn from_config(config: ServiceConfig) -> Result<Self> {
        let catalog = catalog::load_optional(config.ranking.catalog_path.as_deref())?;
        Ok(Self::new(config, catalog))
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn catalog(&self) -> &[Candidate] {
        &self.catalog
    }

    /// Rank the request's items against its text, and the catalog alongside.
    ///
    /// `auto_category` comes from the best caller item, or from the best
    /// recommendation when no caller item clears the threshold.
    pub fn similar(&self, request: &SimilarRequest) -> SimilarOutcome {
        let start = Instant::now();
        let options = self.config.rank_options();
        let threshold = self.config.ranking.auto_category_threshold;

        let suggestions = rank(
            &request.text,
            &CandidateIndex::new(&request.existing_tasks),
            &options,
        );
        let recommendations = rank(&request.text, &CandidateIndex::new(&self.catalog), &options);
        let auto_category = auto_category(&suggestions, threshold)
            .or_else(|| auto_category(&recommendations, threshold))
            .map(str::to_string);

        trace_time!(
            start,
            "similar",
            suggestions = suggestions.len(),
            recommendations = recommendations.len()
        );

        SimilarOutcome {
            suggestions,
            recommendations,
            auto_category,
        }
    }

    /// Suggest a category for a title/description pair
    pub fn category(&self, request: &CategoryRequest) -> String {
        suggest_category(
            &request.title,
            &request.description,
            &self.config.categories,
            &self.config.default_category,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str, tasks: Vec<Candidate>) -> SimilarRequest {
        SimilarRequest {
            text: text.to_string(),
            existing_tasks: tasks,
        }
    }

    #[test]
    fn test_catalog_matches_are_recommendations() {
        let catalog = vec![
            Candidate::new("Morning jog").with_category("fitness"),
            Candidate::new("Meditate").with_category("mindfulness"),
        ];
        let service = SuggestionService::new(ServiceConfig::default(), catalog);

        let outcome = service.similar(&request("morning jog", vec![]));
        assert!(outcome.suggestions.is_empty());
        assert_eq!(outcome.recommendations[0].title, "Morning jog");
        assert_eq!(outcome.auto_category.as_deref(), Some("fitness"));
    }

    #[test]
    fn test_uncategorized_catalog_entry_feeds_auto_category() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recommendations.json");
        std::fs::write(&path, r#"[{"task": "Water the plants"}]"#).unwrap();

        let mut config = ServiceConfig::default();
        config.ranking.catalog_path = Some(path);
        let service = SuggestionService::from_config(config).unwrap();

        let outcome = service.similar(&request("water the plants", vec![]));
        assert_eq!(outcome.recommendations[0].priority.as_deref(), Some("medium"));
        assert_eq!(outcome.auto_category.as_deref(), Some("personal"));
    }

    #[test]
    fn test_suggestions_never_exceed_existing_tasks() {
        let catalog = vec![Candidate::new("buy milk"), Candidate::new("buy bread")];
        let service = SuggestionService::new(ServiceConfig::default(), catalog);

        let outcome = service.similar(&request("buy milk", vec![Candidate::new("buy eggs")]));
        assert_eq!(outcome.suggestions.len(), 1);
        assert_eq!(outcome.suggestions[0].title, "buy eggs");
        assert_eq!(outcome.recommendations.len(), 2);
    }

    #[test]
    fn test_caller_item_wins_auto_category() {
        let catalog = vec![Candidate::new("drink water").with_category("health")];
        let service = SuggestionService::new(ServiceConfig::default(), catalog);
        let tasks = vec![Candidate::new("drink water").with_category("habits")];

        let outcome = service.similar(&request("drink water", tasks));
        assert_eq!(outcome.auto_category.as_deref(), Some("habits"));
    }

    #[test]
    fn test_no_auto_category_for_weak_match() {
        let service = SuggestionService::default();
        let tasks = vec![Candidate::new("jog in the park at dawn").with_category("fitness")];

        let outcome = service.similar(&request("jog", tasks));
        assert_eq!(outcome.suggestions.len(), 1);
        assert!(outcome.suggestions[0].similarity_score <= 0.5);
        assert_eq!(outcome.auto_category, None);
    }

    #[test]
    fn test_empty_existing_tasks() {
        let service = SuggestionService::default();
        let outcome = service.similar(&request("buy milk", vec![]));
        assert_eq!(outcome, SimilarOutcome::empty());
    }

    #[test]
    fn test_top_k_from_config() {
        let mut config = ServiceConfig::default();
        config.ranking.top_k = 2;
        let service = SuggestionService::new(config, vec![]);
        let tasks = (0..6).map(|i| Candidate::new(format!("walk dog {}", i))).collect();

        let outcome = service.similar(&request("walk dog", tasks));
        assert_eq!(outcome.suggestions.len(), 2);
    }

    #[test]
    fn test_category() {
        let service = SuggestionService::default();
        let category = service.category(&CategoryRequest {
            title: "Buy groceries".to_string(),
            description: String::new(),
        });
        assert_eq!(category, "shopping");
    }
}
