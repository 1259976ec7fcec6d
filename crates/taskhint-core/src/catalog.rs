//! Recommendation catalog
//!
//! A static JSON array of recommendation entries ranked alongside the
//! caller's own items, e.g.
//!
//! ```json
//! [{"task": "Morning jog", "category": "fitness", "priority": "medium",
//!   "description": "20 minutes", "similar_habits": ["Evening walk"]}]
//! ```
//!
//! Entries without a category or priority are filed as `personal` and
//! `medium`, so every recommendation can feed the auto-category.
//!
//! A missing file is not fatal: the service logs a warning and runs with an
//! empty catalog. A file that exists but does not parse is an error.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::candidate::Candidate;
use crate::category::DEFAULT_CATEGORY;
use crate::error::{Result, SuggestError};

/// Priority given to catalog entries that do not name one
pub const DEFAULT_PRIORITY: &str = "medium";

/// Load catalog entries from `path`
pub fn load_catalog(path: &Path) -> Result<Vec<Candidate>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "catalog not found, continuing without it");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let invalid = |reason: String| SuggestError::InvalidCatalog {
        path: path.to_path_buf(),
        reason,
    };

    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;
    let mut entries =
        Candidate::list_from_value(&value, "catalog").map_err(|e| invalid(e.to_string()))?;
    for entry in &mut entries {
        entry.category.get_or_insert_with(|| DEFAULT_CATEGORY.to_string());
        entry.priority.get_or_insert_with(|| DEFAULT_PRIORITY.to_string());
    }

    tracing::info!(path = %path.display(), entries = entries.len(), "catalog loaded");
    Ok(entries)
}

/// Load the catalog if a path is configured
pub fn load_optional(path: Option<&Path>) -> Result<Vec<Candidate>> {
    match path {
        Some(path) => load_catalog(path),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_catalog() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("recommendations.json");
        fs::write(
            &path,
            r#"[
                {"task": "Morning jog", "category": "fitness", "priority": "medium",
                 "description": "20 minutes", "similar_habits": ["Evening walk"]},
                {"task": "Read before bed", "category": "learning"}
            ]"#,
        )
        .unwrap();

        let entries = load_catalog(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Morning jog");
        assert_eq!(entries[0].similar_habits, vec!["Evening walk"]);
        assert_eq!(entries[1].category.as_deref(), Some("learning"));
        assert_eq!(entries[1].priority.as_deref(), Some("medium"));
    }

    #[test]
    fn test_entries_get_default_category_and_priority() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("recommendations.json");
        fs::write(&path, r#"[{"task": "Call grandma", "priority": "high"}]"#).unwrap();

        let entries = load_catalog(&path).unwrap();
        assert_eq!(entries[0].category.as_deref(), Some("personal"));
        assert_eq!(entries[0].priority.as_deref(), Some("high"));
    }

    #[test]
    fn test_missing_catalog_is_empty() {
        let dir = tempdir().unwrap();
        let entries = load_catalog(&dir.path().join("absent.json")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_malformed_catalog_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"task": "not an array"}"#).unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, SuggestError::InvalidCatalog { .. }));
        assert!(err.to_string().contains("expected an array"));
    }

    #[test]
    fn test_no_path_means_empty() {
        assert!(load_optional(None).unwrap().is_empty());
    }
}
