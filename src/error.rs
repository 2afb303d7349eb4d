//! Error types for taskhint.

use thiserror::Error;

use crate::features::nlp::AnnotateError;

/// Errors surfaced by taskhint commands and the task store.
#[derive(Debug, Error)]
pub enum TaskhintError {
    /// Configuration could not be read, parsed, or validated.
    #[error("config error: {0}")]
    Config(String),

    /// A SQLite operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// Filesystem or stream I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// User-supplied input was rejected.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A task or list with the given identifier does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The annotator refused the input.
    #[error(transparent)]
    Annotate(#[from] AnnotateError),
}

impl From<rusqlite::Error> for TaskhintError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}
