//! Response payloads for the suggestion endpoints.

use serde::{Deserialize, Serialize};

use taskhint_core::ranking::Suggestion;
use taskhint_core::service::SimilarOutcome;

/// Value of the `status` field in every envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// `POST /api/suggestions/similar` success body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarResponse {
    pub status: Status,
    pub suggestions: Vec<Suggestion>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<Suggestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_category: Option<String>,
}

impl From<SimilarOutcome> for SimilarResponse {
    fn from(outcome: SimilarOutcome) -> Self {
        Self {
            status: Status::Success,
            suggestions: outcome.suggestions,
            recommendations: outcome.recommendations,
            auto_category: outcome.auto_category,
        }
    }
}

/// `POST /api/suggestions/category` success body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub status: Status,
    pub category: String,
}

impl CategoryResponse {
    pub fn new(category: String) -> Self {
        Self {
            status: Status::Success,
            category,
        }
    }
}

/// Error envelope shared by all endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: Status,
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: error.into(),
        }
    }
}

/// `GET /health` body
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub catalog_entries: usize,
}
