//! Error types for tpkit
//!
//! Centralized error handling using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// All error types that can occur in tpkit
#[derive(Debug, Error)]
pub enum TpkitError {
    /// Task title was empty or whitespace only
    #[error("Task title cannot be empty")]
    EmptyTitle,

    /// No task carries the requested id
    #[error("Task with ID {0} not found")]
    TaskNotFound(u64),

    /// Divisor was exactly zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Operation name outside add/sub/mul/div
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Operand could not be parsed as a float
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Every task id up to `u64::MAX` is taken
    #[error("No task IDs left to assign")]
    IdsExhausted,

    /// Calculation overflowed to infinity or produced NaN
    #[error("Result is not a finite number: {0}")]
    NonFiniteResult(f64),

    /// Wrong argument shape on the command line
    #[error("{0}")]
    Usage(String),

    /// Store file exists but does not hold the expected JSON array
    #[error("Corrupt store {}: {source}", .path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Store file exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    StoreRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Store file could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse grouping used by the CLIs to pick exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input; nothing was mutated
    Validation,
    /// Well-formed request the domain rejects
    Domain,
    /// Filesystem or serialization failure
    Io,
    /// Malformed data on disk
    Corrupt,
}

impl TpkitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TpkitError::EmptyTitle
            | TpkitError::UnknownOperation(_)
            | TpkitError::InvalidNumber(_)
            | TpkitError::Usage(_) => ErrorCategory::Validation,
            TpkitError::TaskNotFound(_)
            | TpkitError::DivisionByZero
            | TpkitError::IdsExhausted
            | TpkitError::NonFiniteResult(_) => ErrorCategory::Domain,
            TpkitError::CorruptStore { .. } => ErrorCategory::Corrupt,
            TpkitError::StoreRead { .. }
            | TpkitError::StoreWrite { .. }
            | TpkitError::Io(_)
            | TpkitError::Json(_) => ErrorCategory::Io,
        }
    }
}

/// Result type alias for tpkit operations
pub type Result<T> = std::result::Result<T, TpkitError>;
