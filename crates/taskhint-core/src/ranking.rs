//! Suggestion ranking
//!
//! Scores every candidate once against the normalized query, applies the
//! relevance floor, stable-sorts by score (descending) and keeps the top K.
//! Equal scores keep their candidate order, so the output is deterministic
//! for a given input order.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::candidate::{Candidate, CandidateIndex};
use crate::similarity::SimilarityEngine;
use crate::text::TextOptions;
use crate::trace_time;

/// Default number of suggestions returned
pub const DEFAULT_TOP_K: usize = 5;

/// Default score above which the best match's category is echoed
pub const DEFAULT_AUTO_CATEGORY_THRESHOLD: f64 = 0.5;

/// A ranked candidate returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub similar_habits: Vec<String>,
    /// Similarity score (0.0 to 1.0)
    pub similarity_score: f64,
}

impl Suggestion {
    fn from_candidate(candidate: &Candidate, similarity_score: f64) -> Self {
        Self {
            title: candidate.title.clone(),
            description: candidate.description.clone(),
            category: candidate.category.clone(),
            priority: candidate.priority.clone(),
            similar_habits: candidate.similar_habits.clone(),
            similarity_score,
        }
    }
}

/// Parameters for a ranking pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankOptions {
    /// Maximum number of suggestions returned
    pub top_k: usize,
    /// Candidates scoring at or below this floor are dropped; `None` keeps all
    pub min_score: Option<f64>,
    /// Normalization applied to query and candidates
    pub text: TextOptions,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            min_score: None,
            text: TextOptions::default(),
        }
    }
}

/// Rank candidates against the query text.
///
/// Returns an empty list, not an error, when the query has no terms left
/// after normalization.
pub fn rank(query: &str, candidates: &CandidateIndex<'_>, options: &RankOptions) -> Vec<Suggestion> {
    let start = Instant::now();
    let engine = SimilarityEngine::new(options.text);
    let terms = engine.query_terms(query);

    if terms.is_empty() || options.top_k == 0 {
        tracing::debug!(query_len = query.len(), "empty query, no suggestions");
        return Vec::new();
    }

    let mut scored: Vec<(f64, &Candidate)> = candidates
        .iter()
        .map(|candidate| (engine.score(&terms, candidate), candidate))
        .filter(|(score, _)| options.min_score.map_or(true, |floor| *score > floor))
        .collect();

    // sort_by is stable: equal scores keep candidate order
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.truncate(options.top_k);

    trace_time!(
        start,
        "rank",
        candidates = candidates.len(),
        kept = scored.len()
    );

    scored
        .into_iter()
        .map(|(score, candidate)| Suggestion::from_candidate(candidate, score))
        .collect()
}

/// Category of the best suggestion, if its score is strictly above `threshold`
pub fn auto_category(suggestions: &[Suggestion], threshold: f64) -> Option<&str> {
    suggestions
        .first()
        .filter(|best| best.similarity_score > threshold)
        .and_then(|best| best.category.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.title.as_str()).collect()
    }

    fn rank_titles(query: &str, candidates: &[Candidate], options: &RankOptions) -> Vec<String> {
        rank(query, &CandidateIndex::new(candidates), options)
            .into_iter()
            .map(|s| s.title)
            .collect()
    }

    #[test]
    fn test_buy_milk_ranks_first() {
        let candidates = vec![Candidate::new("read a book"), Candidate::new("buy milk and eggs")];
        let suggestions = rank(
            "buy milk",
            &CandidateIndex::new(&candidates),
            &RankOptions::default(),
        );

        assert_eq!(titles(&suggestions), vec!["buy milk and eggs", "read a book"]);
        assert!(suggestions[0].similarity_score > 0.0);
        assert_eq!(suggestions[1].similarity_score, 0.0);
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let candidates = vec![Candidate::new("buy milk")];
        let index = CandidateIndex::new(&candidates);
        assert!(rank("", &index, &RankOptions::default()).is_empty());
        assert!(rank("  ?! ", &index, &RankOptions::default()).is_empty());
        assert!(rank("a", &index, &RankOptions::default()).is_empty());
    }

    #[test]
    fn test_no_candidates_returns_nothing() {
        let index = CandidateIndex::new(&[]);
        assert!(rank("buy milk", &index, &RankOptions::default()).is_empty());
    }

    #[test]
    fn test_output_bounded_by_top_k_and_input() {
        let candidates: Vec<_> = (0..12)
            .map(|i| Candidate::new(format!("task number {}", i)))
            .collect();
        let index = CandidateIndex::new(&candidates);

        let options = RankOptions {
            top_k: 5,
            ..RankOptions::default()
        };
        assert_eq!(rank("task", &index, &options).len(), 5);

        let few = &candidates[..3];
        assert_eq!(rank("task", &CandidateIndex::new(few), &options).len(), 3);

        let none = RankOptions {
            top_k: 0,
            ..RankOptions::default()
        };
        assert!(rank("task", &index, &none).is_empty());
    }

    #[test]
    fn test_exact_match_ranks_first() {
        let candidates = vec![
            Candidate::new("Evening walk in the park"),
            Candidate::new("Morning walk"),
            Candidate::new("Morning run"),
        ];
        let suggestions = rank(
            "Morning run",
            &CandidateIndex::new(&candidates),
            &RankOptions::default(),
        );
        assert_eq!(suggestions[0].title, "Morning run");
        assert!((suggestions[0].similarity_score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ties_keep_candidate_order() {
        let candidates = vec![
            Candidate::new("water plants"),
            Candidate::new("zzz unrelated"),
            Candidate::new("water garden"),
            Candidate::new("water lawn"),
        ];
        let ranked = rank_titles("water", &candidates, &RankOptions::default());
        assert_eq!(
            ranked,
            vec!["water plants", "water garden", "water lawn", "zzz unrelated"]
        );
    }

    #[test]
    fn test_min_score_floor_is_exclusive() {
        let candidates = vec![
            Candidate::new("buy milk"),
            Candidate::new("buy bread"),
            Candidate::new("read book"),
        ];
        let floor_zero = RankOptions {
            min_score: Some(0.0),
            ..RankOptions::default()
        };
        assert_eq!(
            rank_titles("buy milk", &candidates, &floor_zero),
            vec!["buy milk", "buy bread"]
        );

        // "buy bread" scores exactly 1/3 against "buy milk"
        let floor_third = RankOptions {
            min_score: Some(1.0 / 3.0),
            ..RankOptions::default()
        };
        assert_eq!(
            rank_titles("buy milk", &candidates, &floor_third),
            vec!["buy milk"]
        );
    }

    #[test]
    fn test_deterministic() {
        let candidates = vec![
            Candidate::new("Plan sprint").with_description("work meeting"),
            Candidate::new("Team meeting"),
            Candidate::new("Meeting notes").with_category("work"),
        ];
        let first = rank_titles("meeting", &candidates, &RankOptions::default());
        for _ in 0..5 {
            assert_eq!(rank_titles("meeting", &candidates, &RankOptions::default()), first);
        }
    }

    #[test]
    fn test_metadata_is_copied() {
        let candidates = vec![Candidate::new("Pay rent")
            .with_description("before the 5th")
            .with_category("personal")
            .with_priority("high")];
        let suggestions = rank(
            "pay rent",
            &CandidateIndex::new(&candidates),
            &RankOptions::default(),
        );
        let best = &suggestions[0];
        assert_eq!(best.description.as_deref(), Some("before the 5th"));
        assert_eq!(best.category.as_deref(), Some("personal"));
        assert_eq!(best.priority.as_deref(), Some("high"));
    }

    #[test]
    fn test_auto_category_threshold() {
        let strong = vec![Suggestion {
            title: "Yoga".into(),
            description: None,
            category: Some("fitness".into()),
            priority: None,
            similar_habits: vec![],
            similarity_score: 0.75,
        }];
        assert_eq!(auto_category(&strong, 0.5), Some("fitness"));

        let mut borderline = strong.clone();
        borderline[0].similarity_score = 0.5;
        assert_eq!(auto_category(&borderline, 0.5), None);

        assert_eq!(auto_category(&[], 0.5), None);
    }

    #[test]
    fn test_suggestion_json_omits_empty_fields() {
        let suggestion = Suggestion::from_candidate(&Candidate::new("Stretch"), 0.25);
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "Stretch", "similarity_score": 0.25})
        );
    }
}
