//! Error types for Registrar
//!
//! Provides a unified error type for all operations. Every variant is a
//! recoverable outcome that a caller renders to the user; none of them is
//! fatal to the process.

use thiserror::Error;

/// Result type alias using RegistrarError
pub type Result<T> = std::result::Result<T, RegistrarError>;

/// Unified error type for Registrar operations
#[derive(Debug, Error)]
pub enum RegistrarError {
    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    /// A required field was empty after trimming (add/edit)
    #[error("Missing required field: {field}")]
    Validation { field: &'static str },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // -------------------------------------------------------------------------
    // Empty Conditions
    // -------------------------------------------------------------------------
    #[error("Queue is empty")]
    QueueEmpty,

    #[error("No actions to undo")]
    NothingToUndo,

    // -------------------------------------------------------------------------
    // Roster Errors
    // -------------------------------------------------------------------------
    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("Student already exists: {0}")]
    DuplicateStudent(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Snapshot Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Snapshot corruption detected: {0}")]
    SnapshotCorruption(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RegistrarError {
    /// True for the "nothing there" conditions that are informational rather
    /// than failures (empty queue, empty history).
    pub fn is_empty_condition(&self) -> bool {
        matches!(self, RegistrarError::QueueEmpty | RegistrarError::NothingToUndo)
    }
}

impl From<bincode::Error> for RegistrarError {
    fn from(err: bincode::Error) -> Self {
        RegistrarError::Serialization(err.to_string())
    }
}
