//! Error types and exit codes for pathfind
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid config values)
//! - 3: Data error (malformed graph, unknown vertex, word not in dictionary,
//!   missing input file)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the pathfind CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input or missing vertex/word (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during pathfind operations
#[derive(Error, Debug)]
pub enum PathfindError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid vertex {vertex} (graph has {vertex_count} vertices)")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("invalid graph at token {position}: {reason}")]
    InvalidGraph { position: usize, reason: String },

    #[error("word not found in dictionary: {word}")]
    WordNotFound { word: String },

    #[error("start and end words are the same: {word}")]
    SameWord { word: String },

    #[error("file not found: {path:?}")]
    FileNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperation {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl PathfindError {
    /// Create an error for a vertex index outside `[0, vertex_count)`
    pub fn invalid_vertex(vertex: usize, vertex_count: usize) -> Self {
        PathfindError::InvalidVertex {
            vertex,
            vertex_count,
        }
    }

    /// Create an error for a malformed graph token
    pub fn invalid_graph(position: usize, reason: impl Into<String>) -> Self {
        PathfindError::InvalidGraph {
            position,
            reason: reason.into(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathfindError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        PathfindError::FailedOperation {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathfindError::UnknownFormat(_)
            | PathfindError::UsageError(_)
            | PathfindError::InvalidValue { .. } => ExitCode::Usage,

            PathfindError::InvalidVertex { .. }
            | PathfindError::InvalidGraph { .. }
            | PathfindError::WordNotFound { .. }
            | PathfindError::SameWord { .. }
            | PathfindError::FileNotFound { .. } => ExitCode::Data,

            PathfindError::Io(_)
            | PathfindError::Json(_)
            | PathfindError::Toml(_)
            | PathfindError::FailedOperation { .. }
            | PathfindError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PathfindError::UnknownFormat(_) => "unknown_format",
            PathfindError::UsageError(_) => "usage_error",
            PathfindError::InvalidValue { .. } => "invalid_value",
            PathfindError::InvalidVertex { .. } => "invalid_vertex",
            PathfindError::InvalidGraph { .. } => "invalid_graph",
            PathfindError::WordNotFound { .. } => "word_not_found",
            PathfindError::SameWord { .. } => "same_word",
            PathfindError::FileNotFound { .. } => "file_not_found",
            PathfindError::Io(_) => "io_error",
            PathfindError::Json(_) => "json_error",
            PathfindError::Toml(_) => "toml_error",
            PathfindError::FailedOperation { .. } => "failed_operation",
            PathfindError::Other(_) => "other",
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

/// Result type alias for pathfind operations
pub type Result<T> = std::result::Result<T, PathfindError>;
