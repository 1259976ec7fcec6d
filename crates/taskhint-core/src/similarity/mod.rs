//! Similarity scoring between a query and candidate items

mod calculation;

use std::collections::HashSet;

pub use calculation::jaccard;

use crate::candidate::Candidate;
use crate::text::{normalize, TextOptions};

/// Normalized query terms, computed once per request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryTerms {
    terms: HashSet<String>,
}

impl QueryTerms {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}

/// Similarity Engine
///
/// Holds the normalization options so that query and candidate text are
/// always tokenized the same way.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityEngine {
    options: TextOptions,
}

impl SimilarityEngine {
    /// Create a new Similarity Engine
    pub fn new(options: TextOptions) -> Self {
        SimilarityEngine { options }
    }

    /// Normalize query text into a term set
    pub fn query_terms(&self, text: &str) -> QueryTerms {
        QueryTerms {
            terms: normalize(text, self.options).into_iter().collect(),
        }
    }

    /// Score a candidate against query terms (0.0 to 1.0)
    ///
    /// The candidate's title and description are combined and normalized
    /// with the same options as the query.
    pub fn score(&self, query: &QueryTerms, candidate: &Candidate) -> f64 {
        let candidate_terms: HashSet<String> = normalize(&candidate.combined_text(), self.options)
            .into_iter()
            .collect();
        jaccard(&query.terms, &candidate_terms)
    }

    /// Convenience: score raw query text against a candidate
    pub fn score_text(&self, text: &str, candidate: &Candidate) -> f64 {
        self.score(&self.query_terms(text), candidate)
    }
}
