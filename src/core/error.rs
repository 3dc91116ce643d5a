/// AccountDb Error Module
///
/// This module defines the error types for the account data-access layer.
/// Connection failures, statement failures and explicit absence are kept
/// as separate variants so callers can branch on them.
use thiserror::Error;

/// Error type for every operation in the crate.
///
/// - `Connection`: the database handle could not be opened or re-opened
/// - `Store`: a specific statement failed (syntax, constraint, I/O)
/// - `NotFound`: a strict lookup found no row with the requested id
/// - `InvalidRecord`: a record violated an operation precondition
#[derive(Error, Debug)]
pub enum AccountDbError {
    /// Failure to establish or re-establish the database connection
    #[error("Connection error: failed to open '{path}': {source}")]
    Connection {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Statement execution errors from SQLite
    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// No account row exists for the requested id
    #[error("Account {id} not found")]
    NotFound { id: i64 },

    /// The record cannot be used for the requested operation
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system and I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AccountDbError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AccountDbError::NotFound { .. })
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, AccountDbError::Connection { .. })
    }

    pub fn is_store(&self) -> bool {
        matches!(self, AccountDbError::Store(_))
    }
}

/// Type alias for Result to use AccountDbError as the error type.
pub type Result<T> = std::result::Result<T, AccountDbError>;
