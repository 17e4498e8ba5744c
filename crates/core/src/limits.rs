//! Size limits for keys
//!
//! Enforced before any store access so an oversize or empty key never
//! reaches the ledger platform.

use thiserror::Error;

/// Key limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum key length in bytes (default: 1024)
    pub max_key_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_key_bytes: 1024,
        }
    }
}

impl Limits {
    /// Create limits with a custom key ceiling.
    pub fn with_max_key_bytes(max_key_bytes: usize) -> Self {
        Limits { max_key_bytes }
    }

    /// Validate a key.
    ///
    /// Keys must be non-empty and no longer than `max_key_bytes`.
    pub fn validate_key(&self, key: &str) -> Result<(), LimitError> {
        if key.is_empty() {
            return Err(LimitError::EmptyKey);
        }
        let len = key.len();
        if len > self.max_key_bytes {
            return Err(LimitError::KeyTooLong {
                actual: len,
                max: self.max_key_bytes,
            });
        }
        Ok(())
    }
}

/// Limit violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    /// Key is the empty string
    #[error("key must be a non-empty string")]
    EmptyKey,

    /// Key exceeds `max_key_bytes`
    #[error("key too long: {actual} bytes exceeds maximum {max}")]
    KeyTooLong {
        /// Actual key length in bytes
        actual: usize,
        /// Configured maximum
        max: usize,
    },
}
