//! MemoryStore: in-memory state store with version management
//!
//! # Design Notes
//!
//! - **Single lock**: the map and version counter move together under one
//!   write lock, so `put_if_version` compares and writes atomically
//! - **No history**: each key keeps only its latest value
//! - **Ordered keys**: `BTreeMap` keeps `keys()` deterministic for tests

use std::collections::BTreeMap;

use parking_lot::RwLock;

use userledger_core::{StateStore, StoreError, StoreResult, Versioned};

#[derive(Debug, Default)]
struct Inner {
    data: BTreeMap<String, Versioned>,
    /// Highest version assigned so far (0 = no writes yet)
    version: u64,
}

impl Inner {
    fn write(&mut self, key: &str, value: Vec<u8>) -> u64 {
        self.version += 1;
        let version = self.version;
        self.data.insert(key.to_string(), Versioned::new(value, version));
        version
    }
}

/// In-memory state store.
///
/// Thread-safe through `parking_lot::RwLock`. Cloning is not supported;
/// share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest version assigned so far.
    pub fn current_version(&self) -> u64 {
        self.inner.read().version
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.inner.read().data.len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.read().data.is_empty()
    }

    /// All stored keys, in order.
    pub fn keys(&self) -> Vec<String> {
        self.inner.read().data.keys().cloned().collect()
    }
}

impl StateStore for MemoryStore {
    fn get_versioned(&self, key: &str) -> StoreResult<Option<Versioned>> {
        Ok(self.inner.read().data.get(key).cloned())
    }

    fn put(&self, key: &str, value: Vec<u8>) -> StoreResult<u64> {
        Ok(self.inner.write().write(key, value))
    }

    fn put_if_version(&self, key: &str, expected: Option<u64>, value: Vec<u8>) -> StoreResult<u64> {
        let mut inner = self.inner.write();
        let actual = inner.data.get(key).map(|v| v.version);
        if actual != expected {
            return Err(StoreError::VersionMismatch {
                key: key.to_string(),
                expected,
                actual,
            });
        }
        Ok(inner.write(key, value))
    }

    fn delete(&self, key: &str) -> StoreResult<bool> {
        Ok(self.inner.write().data.remove(key).is_some())
    }
}
