//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::category::{default_rules, CategoryRule, DEFAULT_CATEGORY};
use crate::ranking::{DEFAULT_AUTO_CATEGORY_THRESHOLD, DEFAULT_TOP_K};

/// Default listen address for `taskhint serve`
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP server listens on
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Category used when no rule matches
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Ranking configuration
    #[serde(default)]
    pub ranking: RankingConfig,

    /// HTTP server limits and CORS
    #[serde(default)]
    pub server: ServerConfig,

    /// Category rules, evaluated in order
    #[serde(default = "default_rules")]
    pub categories: Vec<CategoryRule>,
}

/// Configuration for similarity ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Maximum suggestions per response (default 5)
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Drop candidates scoring at or below this value (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,

    /// Filter English stop words (default true)
    #[serde(default = "default_true")]
    pub stop_words: bool,

    /// Porter stemming (default false)
    #[serde(default)]
    pub stemming: bool,

    /// Echo the best match's category above this score (default 0.5)
    #[serde(default = "default_auto_category_threshold")]
    pub auto_category_threshold: f64,

    /// JSON file of recommendation entries ranked alongside request items (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

/// Configuration for the HTTP server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Per-request ranking timeout in milliseconds (default 5000)
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Maximum accepted request body in bytes (default 16 MiB)
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            default_category: default_category(),
            ranking: RankingConfig::default(),
            server: ServerConfig::default(),
            categories: default_rules(),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            min_score: None,
            stop_words: true,
            stemming: false,
            auto_category_threshold: default_auto_category_threshold(),
            catalog_path: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: default_request_timeout_ms(),
            max_body_bytes: default_max_body_bytes(),
            cors_origins: Vec::new(),
        }
    }
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_true() -> bool {
    true
}

fn default_auto_category_threshold() -> f64 {
    DEFAULT_AUTO_CATEGORY_THRESHOLD
}

fn default_request_timeout_ms() -> u64 {
    5000
}

fn default_max_body_bytes() -> usize {
    16 * 1024 * 1024
}
