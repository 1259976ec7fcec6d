//! Request payloads and their validation
//!
//! Bodies are parsed into a generic JSON value first so that every shape
//! problem can be reported with the offending field's name, instead of
//! surfacing a deserializer message.

use serde_json::{Map, Value};

use crate::bail_field;
use crate::candidate::Candidate;
use crate::error::{Result, SuggestError};

/// Body of `POST /api/suggestions/similar`
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarRequest {
    pub text: String,
    pub existing_tasks: Vec<Candidate>,
}

/// Body of `POST /api/suggestions/category`
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRequest {
    pub title: String,
    pub description: String,
}

impl SimilarRequest {
    /// Parse and validate a raw request body.
    ///
    /// `existing_tasks` may be omitted and then counts as empty.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let object = parse_object(body)?;
        let text = required_string(&object, "text")?;
        let existing_tasks = match object.get("existing_tasks") {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => Candidate::list_from_value(value, "existing_tasks")?,
        };
        Ok(Self {
            text,
            existing_tasks,
        })
    }
}

impl CategoryRequest {
    /// Parse and validate a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let object = parse_object(body)?;
        let title = required_string(&object, "title")?;
        let description = match object.get("description") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(_) => bail_field!("description", "expected a string"),
        };
        Ok(Self { title, description })
    }
}

fn parse_object(body: &[u8]) -> Result<Map<String, Value>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(SuggestError::MalformedBody("empty body".to_string()));
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(SuggestError::MalformedBody(
            "expected a JSON object".to_string(),
        )),
        Err(e) => Err(SuggestError::MalformedBody(e.to_string())),
    }
}

fn required_string(object: &Map<String, Value>, field: &str) -> Result<String> {
    match object.get(field) {
        None | Some(Value::Null) => Err(SuggestError::missing_field(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => bail_field!(field, "expected a string"),
    }
}
