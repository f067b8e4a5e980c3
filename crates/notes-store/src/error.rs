//! Error types for the storage layer.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the collection document failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The collection document is not a valid JSON array of notes.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No note with this name exists.
    #[error("note not found: {0}")]
    NoteNotFound(String),

    /// A note with this name already exists.
    #[error("duplicate note: {0}")]
    DuplicateNote(String),

    /// Backend refused the operation (used by `MemoryStore` failure injection).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
