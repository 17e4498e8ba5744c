//! The state store abstraction
//!
//! The ledger platform provides a durable key-value store; the chaincode
//! only ever talks to it through [`StateStore`]. Isolation between
//! concurrent invocations is the store's business. Nothing in this trait
//! makes a read followed by a write atomic, except [`StateStore::put_if_version`].

use serde::{Deserialize, Serialize};

use crate::error::StoreResult;

/// A stored value together with the version the store assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Versioned {
    /// Raw stored bytes
    pub value: Vec<u8>,
    /// Store-assigned version, monotonically increasing across writes
    pub version: u64,
}

impl Versioned {
    /// Create a versioned value.
    pub fn new(value: Vec<u8>, version: u64) -> Self {
        Self { value, version }
    }

    /// Discard the version.
    pub fn into_value(self) -> Vec<u8> {
        self.value
    }
}

/// Key-value state store consumed by the chaincode.
///
/// Thread safety: implementations must be safe to call from multiple
/// threads (`Send + Sync`), since an executor may be shared.
pub trait StateStore: Send + Sync {
    /// Get the value and version for a key.
    ///
    /// Returns `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get_versioned(&self, key: &str) -> StoreResult<Option<Versioned>>;

    /// Unconditionally write a value, returning its new version.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn put(&self, key: &str, value: Vec<u8>) -> StoreResult<u64>;

    /// Write a value only if the key is currently at `expected`.
    ///
    /// `expected = None` means the key must be absent. On mismatch nothing
    /// is written and [`StoreError::VersionMismatch`](crate::StoreError::VersionMismatch)
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns an error on version mismatch or if the store cannot be written.
    fn put_if_version(&self, key: &str, expected: Option<u64>, value: Vec<u8>) -> StoreResult<u64>;

    /// Delete a key.
    ///
    /// Returns `true` if the key existed. Deleting an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn delete(&self, key: &str) -> StoreResult<bool>;

    /// Get the raw bytes for a key, or `None` if absent.
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.get_versioned(key)?.map(Versioned::into_value))
    }

    /// Presence check, independent of what the payload contains.
    fn exists(&self, key: &str) -> StoreResult<bool> {
        Ok(self.get_versioned(key)?.is_some())
    }
}
