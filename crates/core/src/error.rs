//! Error types for state store access
//!
//! The ledger platform owns the store, so every failure it reports is
//! opaque to the chaincode except for version mismatches on conditional
//! writes, which callers can act on.

use thiserror::Error;

/// Result type alias for state store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors reported by a [`StateStore`](crate::StateStore)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The underlying get/put/delete failed
    #[error("state store unavailable during {op} of '{key}': {reason}")]
    Unavailable {
        /// Operation that failed (`get`, `put`, `delete`)
        op: &'static str,
        /// Key the operation targeted
        key: String,
        /// Store-provided description
        reason: String,
    },

    /// Conditional write found a different version than expected
    #[error("version mismatch on '{key}': expected {expected:?}, found {actual:?}")]
    VersionMismatch {
        /// Key the conditional write targeted
        key: String,
        /// Version the caller observed (`None` = key absent)
        expected: Option<u64>,
        /// Version currently stored (`None` = key absent)
        actual: Option<u64>,
    },
}

impl StoreError {
    /// Build an `Unavailable` error.
    pub fn unavailable(op: &'static str, key: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::Unavailable {
            op,
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Key the failed operation targeted.
    pub fn key(&self) -> &str {
        match self {
            StoreError::Unavailable { key, .. } | StoreError::VersionMismatch { key, .. } => key,
        }
    }
}
