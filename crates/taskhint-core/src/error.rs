//! Error types and exit codes for taskhint
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/config error (unreadable config, malformed catalog or task file)
//!
//! The HTTP layer does not use exit codes; it only distinguishes client-side
//! problems (`is_client_error`) from internal failures.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the taskhint binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/config error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while validating, ranking or serving suggestions
#[derive(Error, Debug)]
pub enum SuggestError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Request validation errors (HTTP 400, exit code 3)
    #[error("missing field `{field}`")]
    MissingField { field: String },

    #[error("invalid field `{field}`: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    // Data/config errors (exit code 3)
    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("invalid catalog in {path:?}: {reason}")]
    InvalidCatalog { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("internal error: {0}")]
    Internal(String),

    #[error("suggestion service error: {0}")]
    Remote(String),

    #[error("{0}")]
    Other(String),
}

impl SuggestError {
    /// Create an error for a required field absent from a request
    pub fn missing_field(field: &str) -> Self {
        SuggestError::MissingField {
            field: field.to_string(),
        }
    }

    /// Create an error for a request field with the wrong shape
    pub fn invalid_field(field: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        SuggestError::InvalidField {
            field: field.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration setting
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        SuggestError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, error: impl std::fmt::Display) -> Self {
        SuggestError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Whether this error was caused by the caller's input rather than by the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SuggestError::MissingField { .. }
                | SuggestError::InvalidField { .. }
                | SuggestError::MalformedBody(_)
        )
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SuggestError::UsageError(_)
            | SuggestError::InvalidValue { .. } => ExitCode::Usage,

            SuggestError::MissingField { .. }
            | SuggestError::InvalidField { .. }
            | SuggestError::MalformedBody(_)
            | SuggestError::InvalidConfig { .. }
            | SuggestError::InvalidCatalog { .. } => ExitCode::Data,

            SuggestError::Io(_)
            | SuggestError::Json(_)
            | SuggestError::FailedOperation { .. }
            | SuggestError::Internal(_)
            | SuggestError::Remote(_)
            | SuggestError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            SuggestError::UsageError(_) => "usage_error",
            SuggestError::InvalidValue { .. } => "invalid_value",
            SuggestError::MissingField { .. } => "missing_field",
            SuggestError::InvalidField { .. } => "invalid_field",
            SuggestError::MalformedBody(_) => "malformed_body",
            SuggestError::InvalidConfig { .. } => "invalid_config",
            SuggestError::InvalidCatalog { .. } => "invalid_catalog",
            SuggestError::Io(_) => "io_error",
            SuggestError::Json(_) => "json_error",
            SuggestError::FailedOperation { .. } => "failed_operation",
            SuggestError::Internal(_) => "internal_error",
            SuggestError::Remote(_) => "remote_error",
            SuggestError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for taskhint operations
pub type Result<T> = std::result::Result<T, SuggestError>;
