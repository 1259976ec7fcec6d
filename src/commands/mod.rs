//! CLI commands for taskhint

pub mod category;
pub mod dispatch;
pub mod format;
pub mod rank;
pub mod serve;
pub mod suggest;
pub mod watch;

use std::fs;
use std::path::Path;

use serde_json::Value;

use taskhint_core::candidate::Candidate;
use taskhint_core::error::{Result, SuggestError};

fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| SuggestError::invalid_field(path.display().to_string(), e))
}

/// Read a JSON array of items as candidates
pub fn read_tasks(path: &Path) -> Result<Vec<Candidate>> {
    Candidate::list_from_value(&read_json(path)?, &path.display().to_string())
}

/// Read a JSON array of items, checking each one is a usable candidate.
///
/// Returns the raw values so they can be forwarded to a service unchanged.
pub fn read_task_values(path: &Path) -> Result<Vec<Value>> {
    let value = read_json(path)?;
    Candidate::list_from_value(&value, &path.display().to_string())?;

    match value {
        Value::Array(items) => Ok(items),
        _ => Err(SuggestError::invalid_field(
            path.display().to_string(),
            "expected an array",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_tasks() {
        let file = file_with(r#"[{"id": 1, "title": "Buy milk"}, {"task": "Read"}]"#);
        let tasks = read_tasks(file.path()).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].title, "Read");
    }

    #[test]
    fn test_read_tasks_rejects_object() {
        let file = file_with(r#"{"title": "Buy milk"}"#);
        let err = read_tasks(file.path()).unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_read_task_values_keeps_raw_items() {
        let file = file_with(r#"[{"title": "Buy milk", "streak": 4}]"#);
        let values = read_task_values(file.path()).unwrap();
        assert_eq!(values[0]["streak"], 4);
    }

    #[test]
    fn test_read_tasks_malformed_json() {
        let file = file_with("[{");
        assert!(read_tasks(file.path()).is_err());
    }
}
