//! Error types for record operations

use thiserror::Error;
use userledger_core::{LimitError, StoreError};

/// Result type alias for record operations
pub type RecordResult<T> = std::result::Result<T, RecordError>;

/// Errors raised by [`RecordStore`](crate::RecordStore) operations.
///
/// Every variant is terminal for the operation that raised it. Writes
/// that already succeeded are not rolled back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Wrong arity, non-numeric field, empty or reserved name
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A record with this name already exists
    #[error("user already exists: {0}")]
    DuplicateEntity(String),

    /// The state store failed
    #[error(transparent)]
    Store(StoreError),

    /// The index is missing or does not decode as a list of names
    #[error("corrupt index '{key}': {reason}")]
    CorruptIndex {
        /// Index key
        key: String,
        /// What was wrong with it
        reason: String,
    },

    /// The index changed between read and write (versioned mode only)
    #[error("index '{key}' changed concurrently: expected version {expected:?}, found {actual:?}")]
    IndexConflict {
        /// Index key
        key: String,
        /// Version observed when the index was read
        expected: Option<u64>,
        /// Version found at write time
        actual: Option<u64>,
    },

    /// Encoding a record or index failed
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Configuration could not be loaded or is invalid
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl RecordError {
    /// Build an `InvalidArgument` error.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        RecordError::InvalidArgument(reason.into())
    }
}

impl From<StoreError> for RecordError {
    fn from(e: StoreError) -> Self {
        RecordError::Store(e)
    }
}

impl From<LimitError> for RecordError {
    fn from(e: LimitError) -> Self {
        RecordError::InvalidArgument(e.to_string())
    }
}

impl From<serde_json::Error> for RecordError {
    fn from(e: serde_json::Error) -> Self {
        RecordError::Serialization(e.to_string())
    }
}
