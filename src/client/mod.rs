//! Client side of the suggestion contract
//!
//! Mirrors how the mobile app consumes the service:
//! - the query is `"{title} {description}"` trimmed; nothing is sent when empty
//! - a response with `status: "error"` is a failure, anything else is success
//! - suggestions may name their display field `title` or `task`
//! - the lenient calls never fail: they log and fall back to no suggestions
//!   or to the default category, and never retry

pub mod debounce;

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::watch;

use taskhint_core::category::DEFAULT_CATEGORY;
use taskhint_core::error::{Result, SuggestError};
use taskhint_core::ranking::Suggestion;
use taskhint_core::service::SimilarOutcome;

pub use debounce::{Debouncer, DEFAULT_DELAY};

/// Default service address
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

/// Input shorter than this (in chars, title and description alike) does not trigger a lookup
pub const MIN_INPUT_CHARS: usize = 3;

#[derive(Debug, Deserialize)]
struct WireSuggestion {
    #[serde(alias = "task")]
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    priority: Option<String>,
    #[serde(default)]
    similar_habits: Vec<String>,
    #[serde(default)]
    similarity_score: f64,
}

impl From<WireSuggestion> for Suggestion {
    fn from(wire: WireSuggestion) -> Self {
        Suggestion {
            title: wire.title.unwrap_or_default(),
            description: wire.description,
            category: wire.category,
            priority: wire.priority,
            similar_habits: wire.similar_habits,
            similarity_score: wire.similarity_score,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireEnvelope {
    status: Option<String>,
    error: Option<String>,
    #[serde(default)]
    suggestions: Vec<WireSuggestion>,
    #[serde(default)]
    recommendations: Vec<WireSuggestion>,
    auto_category: Option<String>,
    category: Option<String>,
}

impl WireEnvelope {
    fn into_result(self) -> Result<Self> {
        if self.status.as_deref() == Some("error") {
            let message = self.error.unwrap_or_else(|| "unknown error".to_string());
            return Err(SuggestError::Remote(message));
        }
        Ok(self)
    }
}

/// HTTP client for a taskhint service
#[derive(Debug, Clone)]
pub struct SuggestionClient {
    http: reqwest::Client,
    base_url: String,
}

impl SuggestionClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SuggestError::failed("build HTTP client", e))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post(&self, path: &str, body: &Value) -> Result<WireEnvelope> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| SuggestError::failed(&format!("POST {}", url), e))?;

        // Error envelopes arrive with 4xx/5xx codes; the body decides
        let status = response.status();
        let envelope: WireEnvelope = response.json().await.map_err(|e| {
            SuggestError::failed(&format!("decode response ({})", status), e)
        })?;
        envelope.into_result()
    }

    /// Fetch ranked suggestions, reporting every failure
    pub async fn fetch_similar(
        &self,
        title: &str,
        description: &str,
        existing_tasks: &[Value],
    ) -> Result<SimilarOutcome> {
        let text = format!("{} {}", title, description).trim().to_string();
        if text.is_empty() {
            return Ok(SimilarOutcome::empty());
        }

        let body = json!({ "text": text, "existing_tasks": existing_tasks });
        let envelope = self.post("/api/suggestions/similar", &body).await?;
        Ok(SimilarOutcome {
            suggestions: envelope.suggestions.into_iter().map(Into::into).collect(),
            recommendations: envelope
                .recommendations
                .into_iter()
                .map(Into::into)
                .collect(),
            auto_category: envelope.auto_category,
        })
    }

    /// Fetch ranked suggestions, degrading to an empty list on any failure
    pub async fn similar_tasks(
        &self,
        title: &str,
        description: &str,
        existing_tasks: &[Value],
    ) -> Vec<Suggestion> {
        match self.fetch_similar(title, description, existing_tasks).await {
            Ok(outcome) => outcome.suggestions,
            Err(error) => {
                tracing::warn!(%error, "similar suggestions unavailable");
                Vec::new()
            }
        }
    }

    /// Fetch a category suggestion, reporting every failure
    pub async fn fetch_category(&self, title: &str, description: &str) -> Result<String> {
        let body = json!({ "title": title, "description": description });
        let envelope = self.post("/api/suggestions/category", &body).await?;
        envelope
            .category
            .ok_or_else(|| SuggestError::Remote("response has no category".to_string()))
    }

    /// Fetch a category suggestion, falling back to the default category
    pub async fn suggested_category(&self, title: &str, description: &str) -> String {
        match self.fetch_category(title, description).await {
            Ok(category) => category,
            Err(error) => {
                tracing::warn!(%error, "category suggestion unavailable");
                DEFAULT_CATEGORY.to_string()
            }
        }
    }
}

/// Anything that can produce suggestions for form input
pub trait SuggestionSource: Send + Sync + 'static {
    fn suggestions_for(
        &self,
        title: &str,
        description: &str,
        existing_tasks: &[Value],
    ) -> impl Future<Output = Vec<Suggestion>> + Send;
}

impl SuggestionSource for SuggestionClient {
    async fn suggestions_for(
        &self,
        title: &str,
        description: &str,
        existing_tasks: &[Value],
    ) -> Vec<Suggestion> {
        self.similar_tasks(title, description, existing_tasks).await
    }
}

/// Debounced lookups where only the latest input's result is published.
///
/// Results are delivered through a `watch` channel. A response that arrives
/// after newer input has been seen is discarded.
pub struct DebouncedSuggester<S> {
    source: Arc<S>,
    debouncer: Debouncer,
    generation: Arc<AtomicU64>,
    results: Arc<watch::Sender<Vec<Suggestion>>>,
}

impl<S: SuggestionSource> DebouncedSuggester<S> {
    pub fn new(source: S, delay: Duration) -> (Self, watch::Receiver<Vec<Suggestion>>) {
        let (sender, receiver) = watch::channel(Vec::new());
        let suggester = Self {
            source: Arc::new(source),
            debouncer: Debouncer::new(delay),
            generation: Arc::new(AtomicU64::new(0)),
            results: Arc::new(sender),
        };
        (suggester, receiver)
    }

    /// Record new form input; a lookup fires once input is quiet for the delay
    pub fn input(&self, title: &str, description: &str, existing_tasks: Vec<Value>) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if title.chars().count() < MIN_INPUT_CHARS
            && description.chars().count() < MIN_INPUT_CHARS
        {
            self.debouncer.cancel();
            // Too little input to suggest anything: stop showing old results
            self.results.send_if_modified(|shown| {
                let had_results = !shown.is_empty();
                shown.clear();
                had_results
            });
            return;
        }

        let source = Arc::clone(&self.source);
        let latest = Arc::clone(&self.generation);
        let results = Arc::clone(&self.results);
        let title = title.to_string();
        let description = description.to_string();

        self.debouncer.schedule(async move {
            let suggestions = source
                .suggestions_for(&title, &description, &existing_tasks)
                .await;
            if latest.load(Ordering::SeqCst) == generation {
                results.send_replace(suggestions);
            } else {
                tracing::debug!(generation, "discarding superseded suggestions");
            }
        });
    }

    /// Drop pending work, e.g. when the form is closed
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.debouncer.cancel();
    }

    /// Wait for the pending lookup (if any) to complete
    pub async fn settle(&self) {
        self.debouncer.flush().await;
    }
}
