//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON for the host
//! - **Terminal**: The invocation stops at the first error; earlier writes stay

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants |
/// |----------|----------|
/// | Validation | `InvalidArgument`, `UnknownOperation` |
/// | State | `DuplicateEntity`, `CorruptIndex` |
/// | Concurrency | `IndexConflict` |
/// | System | `StoreUnavailable`, `Serialization`, `Config`, `Internal` |
///
/// # Example
///
/// ```ignore
/// match executor.invoke("createUser", &["bob", "2", "5559999"]) {
///     Ok(_) => {}
///     Err(Error::DuplicateEntity { name }) => println!("{} already exists", name),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Validation Errors ====================
    /// Wrong arity, non-numeric field, empty or reserved name
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Function name not recognised by this entry point
    #[error("received unknown function invocation: {function}")]
    UnknownOperation { function: String },

    // ==================== State Errors ====================
    /// A record with this name already exists
    #[error("user already exists: {name}")]
    DuplicateEntity { name: String },

    /// Index missing (init never ran) or undecodable
    #[error("corrupt index '{key}': {reason}")]
    CorruptIndex { key: String, reason: String },

    // ==================== Concurrency Errors ====================
    /// Index changed between read and write
    #[error("index '{key}' changed concurrently: expected version {expected:?}, found {actual:?}")]
    IndexConflict {
        key: String,
        expected: Option<u64>,
        actual: Option<u64>,
    },

    // ==================== System Errors ====================
    /// The state store failed
    #[error("state store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    /// Encoding failed
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// Configuration invalid
    #[error("invalid configuration: {reason}")]
    Config { reason: String },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {reason}")]
    Internal { reason: String },
}

impl Error {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            reason: reason.into(),
        }
    }
}
