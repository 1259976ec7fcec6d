//! Service configuration for taskhint
//!
//! Configuration is a TOML file. Lookup order: an explicit `--config` path,
//! then `$TASKHINT_CONFIG`, then `<config dir>/taskhint/config.toml`. When
//! none exists the built-in defaults apply.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{Result, SuggestError};
use crate::ranking::RankOptions;
use crate::text::TextOptions;

pub use types::{RankingConfig, ServerConfig, ServiceConfig, DEFAULT_BIND};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "TASKHINT_CONFIG";

impl ServiceConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SuggestError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: ServiceConfig =
            toml::from_str(&content).map_err(|e| SuggestError::InvalidConfig {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        config
            .validate()
            .map_err(|e| SuggestError::InvalidConfig {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SuggestError::failed("serialize config", e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve and load configuration, falling back to defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Reject values the ranker cannot work with
    pub fn validate(&self) -> Result<()> {
        let ranking = &self.ranking;
        if ranking.top_k == 0 {
            bail_invalid!("ranking.top_k", "0 (must be at least 1)");
        }
        if !(0.0..=1.0).contains(&ranking.auto_category_threshold) {
            bail_invalid!(
                "ranking.auto_category_threshold",
                format!("{} (must be within 0..=1)", ranking.auto_category_threshold)
            );
        }
        if let Some(min_score) = ranking.min_score {
            if !(0.0..=1.0).contains(&min_score) {
                bail_invalid!(
                    "ranking.min_score",
                    format!("{} (must be within 0..=1)", min_score)
                );
            }
        }
        if self.server.request_timeout_ms == 0 {
            bail_invalid!("server.request_timeout_ms", "0 (must be positive)");
        }
        if self.categories.iter().any(|rule| rule.name.trim().is_empty()) {
            bail_invalid!("categories", "rule with an empty name");
        }
        Ok(())
    }

    pub fn text_options(&self) -> TextOptions {
        TextOptions {
            stop_words: self.ranking.stop_words,
            stemming: self.ranking.stemming,
        }
    }

    pub fn rank_options(&self) -> RankOptions {
        RankOptions {
            top_k: self.ranking.top_k,
            min_score: self.ranking.min_score,
            text: self.text_options(),
        }
    }
}

/// `<config dir>/taskhint/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("taskhint").join("config.toml"))
}
