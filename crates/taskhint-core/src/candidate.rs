//! Candidates: existing items eligible to be suggested
//!
//! Candidates arrive as loosely-typed JSON objects (tasks, habits, bucket-list
//! entries). Tasks use `title`, habits use `name`, and the recommendation
//! catalog uses `task`, so all three spellings are accepted for the display
//! field. Lookup order is `title`, `task`, `name`.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::bail_field;
use crate::error::{Result, SuggestError};

/// Field names accepted for a candidate's display title, in lookup order
pub const TITLE_FIELDS: [&str; 3] = ["title", "task", "name"];

/// Opaque candidate identifier (database rows use integers, clients may use strings)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandidateId {
    Number(i64),
    Text(String),
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateId::Number(n) => write!(f, "{}", n),
            CandidateId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// An existing item eligible for suggestion
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Candidate {
    pub id: Option<CandidateId>,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    /// Related habit names; only catalog entries carry these
    pub similar_habits: Vec<String>,
}

impl Candidate {
    /// Create a candidate with only a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: CandidateId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Title and description joined into the text that gets scored
    pub fn combined_text(&self) -> String {
        match self.description.as_deref() {
            Some(description) if !description.is_empty() => {
                format!("{} {}", self.title, description)
            }
            _ => self.title.clone(),
        }
    }

    /// Parse a candidate from a JSON value.
    ///
    /// `path` names the value in error messages, e.g. `existing_tasks[3]`.
    pub fn from_value(value: &Value, path: &str) -> Result<Self> {
        let Some(object) = value.as_object() else {
            bail_field!(path, "expected an object");
        };

        let title = title_of(object, path)?;
        let id = match object.get("id") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(CandidateId::Text(s.clone())),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(n) => Some(CandidateId::Number(n)),
                None => bail_field!(format!("{}.id", path), "expected an integer or string"),
            },
            Some(_) => bail_field!(format!("{}.id", path), "expected an integer or string"),
        };

        Ok(Self {
            id,
            title,
            description: optional_string(object, "description", path)?,
            category: optional_string(object, "category", path)?,
            priority: optional_string(object, "priority", path)?,
            similar_habits: string_list(object, "similar_habits", path)?,
        })
    }

    /// Parse an array of candidates, rejecting duplicate ids.
    pub fn list_from_value(value: &Value, path: &str) -> Result<Vec<Self>> {
        let Some(items) = value.as_array() else {
            bail_field!(path, "expected an array");
        };

        let mut seen = HashSet::new();
        let mut candidates = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let item_path = format!("{}[{}]", path, i);
            let candidate = Self::from_value(item, &item_path)?;
            if let Some(id) = &candidate.id {
                if !seen.insert(id.clone()) {
                    return Err(SuggestError::invalid_field(
                        format!("{}.id", item_path),
                        format!("duplicate id {}", id),
                    ));
                }
            }
            candidates.push(candidate);
        }
        Ok(candidates)
    }
}

fn title_of(object: &Map<String, Value>, path: &str) -> Result<String> {
    for field in TITLE_FIELDS {
        match object.get(field) {
            None | Some(Value::Null) => continue,
            Some(Value::String(s)) => return Ok(s.clone()),
            Some(_) => bail_field!(format!("{}.{}", path, field), "expected a string"),
        }
    }
    bail_field!(path, "missing title")
}

fn optional_string(object: &Map<String, Value>, field: &str, path: &str) -> Result<Option<String>> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => bail_field!(format!("{}.{}", path, field), "expected a string"),
    }
}

fn string_list(object: &Map<String, Value>, field: &str, path: &str) -> Result<Vec<String>> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(SuggestError::invalid_field(
                    format!("{}.{}", path, field),
                    "expected an array of strings",
                )),
            })
            .collect(),
        Some(_) => bail_field!(format!("{}.{}", path, field), "expected an array of strings"),
    }
}

/// Read-only view over the candidates ranked together.
///
/// Entries keep their original order; ranking ties are broken by it.
#[derive(Debug, Default)]
pub struct CandidateIndex<'a> {
    entries: Vec<&'a Candidate>,
}

impl<'a> CandidateIndex<'a> {
    pub fn new(candidates: &'a [Candidate]) -> Self {
        Self {
            entries: candidates.iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Candidate> + '_ {
        self.entries.iter().copied()
    }
}
