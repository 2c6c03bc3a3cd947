//! Error types for the student record store and the command layer above it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the record store itself.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Corrupt record file {}: {}", .path.display(), .reason)]
    Corrupt { path: PathBuf, reason: String },
}

/// Errors surfaced to callers of the command service and CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("Student already exists: {0} (use --overwrite to replace it)")]
    StudentExists(String),

    #[error("Import file not found: {}", .0.display())]
    ImportFileNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),
}

impl ApiError {
    /// Validation failures are recoverable in interactive mode.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ApiError::Validation(_)
                | ApiError::StudentNotFound(_)
                | ApiError::StudentExists(_)
                | ApiError::ImportFileNotFound(_)
        )
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
