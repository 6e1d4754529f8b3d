//! Error types and exit codes for waypath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid values)
//! - 3: Data/store error (missing store, unknown location, duplicate route)

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing store, unknown ids (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<rusqlite::Error> for WaypathError {
    fn from(err: rusqlite::Error) -> Self {
        WaypathError::Other(err.to_string())
    }
}

/// Errors that can occur during waypath operations
#[derive(Error, Debug)]
pub enum WaypathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/store errors (exit code 3)
    #[error("store not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("invalid store: {reason}")]
    InvalidStore { reason: String },

    #[error("unknown node: {id}")]
    UnknownNode { id: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("ambiguous location name '{name}' matches {count} locations")]
    AmbiguousName { name: String, count: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl WaypathError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        WaypathError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a failed transaction operation
    pub fn transaction(operation: &str, error: impl std::fmt::Display) -> Self {
        WaypathError::FailedOperation {
            operation: format!("{} transaction", operation),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WaypathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        WaypathError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        WaypathError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a graph endpoint that was never registered as a node
    pub fn unknown_node(id: impl Into<String>) -> Self {
        WaypathError::UnknownNode { id: id.into() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaypathError::UnknownFormat(_)
            | WaypathError::UsageError(_)
            | WaypathError::InvalidValue { .. } => ExitCode::Usage,

            WaypathError::StoreNotFound { .. }
            | WaypathError::InvalidStore { .. }
            | WaypathError::UnknownNode { .. }
            | WaypathError::NotFound { .. }
            | WaypathError::AlreadyExists { .. }
            | WaypathError::AmbiguousName { .. } => ExitCode::Data,

            WaypathError::Io(_)
            | WaypathError::Json(_)
            | WaypathError::Toml(_)
            | WaypathError::FailedOperation { .. }
            | WaypathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WaypathError::UnknownFormat(_) => "unknown_format",
            WaypathError::UsageError(_) => "usage_error",
            WaypathError::InvalidValue { .. } => "invalid_value",
            WaypathError::StoreNotFound { .. } => "store_not_found",
            WaypathError::InvalidStore { .. } => "invalid_store",
            WaypathError::UnknownNode { .. } => "unknown_node",
            WaypathError::NotFound { .. } => "not_found",
            WaypathError::AlreadyExists { .. } => "already_exists",
            WaypathError::AmbiguousName { .. } => "ambiguous_name",
            WaypathError::Io(_) => "io_error",
            WaypathError::Json(_) => "json_error",
            WaypathError::Toml(_) => "toml_error",
            WaypathError::FailedOperation { .. } => "failed_operation",
            WaypathError::Other(_) => "other",
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

/// Result type alias for waypath operations
pub type Result<T> = std::result::Result<T, WaypathError>;
