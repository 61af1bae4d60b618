//! Error handling module for the exercise runner
//!
//! The containers and algorithms never fail: missing values are `None` and
//! bracket validation is a plain boolean. Errors only come from the edges of
//! the program: command-line values, rotation limits and JSON output.
//! Config file loading reports through `anyhow` instead.

use thiserror::Error;

/// Main error type for the exercise runner
#[derive(Error, Debug)]
pub enum ExerciseError {
    /// Command-line values that do not map onto a known type
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation errors (user input, config values)
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for exercise runner operations
pub type Result<T> = std::result::Result<T, ExerciseError>;

impl ExerciseError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
