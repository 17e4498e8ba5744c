//! The user name index
//!
//! A single stored JSON array of names, appended on create and pruned on
//! delete. The index is loaded, changed in memory, and written back; the
//! version observed at load time travels with it so a versioned write can
//! detect that someone else got there first.

use serde::{Deserialize, Serialize};

use userledger_core::{StateStore, StoreError};

use crate::config::IndexWriteMode;
use crate::error::{RecordError, RecordResult};

/// An in-memory copy of the stored index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIndex {
    names: Vec<String>,
    /// Version read from the store (`None` = not stored yet)
    version: Option<u64>,
}

impl UserIndex {
    /// An empty index that has not been stored.
    pub fn empty() -> Self {
        Self {
            names: Vec::new(),
            version: None,
        }
    }

    /// Load the index stored under `key`.
    ///
    /// A missing or undecodable index is an error, never an empty index:
    /// starting over would silently forget every existing user.
    pub fn load(store: &dyn StateStore, key: &str) -> RecordResult<Self> {
        let stored = store.get_versioned(key)?.ok_or_else(|| RecordError::CorruptIndex {
            key: key.to_string(),
            reason: "index not initialized".to_string(),
        })?;
        let names: Vec<String> =
            serde_json::from_slice(&stored.value).map_err(|e| RecordError::CorruptIndex {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            names,
            version: Some(stored.version),
        })
    }

    /// Names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Consume the index, returning its names.
    pub fn into_names(self) -> Vec<String> {
        self.names
    }

    /// Version observed at load.
    pub fn version(&self) -> Option<u64> {
        self.version
    }

    /// Number of entries, counting duplicates.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `name` appears at least once.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Append a name.
    pub fn push(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    /// Remove the first entry equal to `name`.
    ///
    /// Later duplicates are left in place. Returns `true` if an entry was removed.
    pub fn remove_first(&mut self, name: &str) -> bool {
        match self.names.iter().position(|n| n == name) {
            Some(pos) => {
                self.names.remove(pos);
                true
            }
            None => false,
        }
    }

    /// JSON array encoding.
    pub fn encode(&self) -> RecordResult<Vec<u8>> {
        Ok(serde_json::to_vec(&self.names)?)
    }

    /// Write the index back under `key`, returning the new version.
    ///
    /// In [`IndexWriteMode::Versioned`] the write only lands if the stored
    /// index is still at the version this copy was loaded from.
    pub fn save(&mut self, store: &dyn StateStore, key: &str, mode: IndexWriteMode) -> RecordResult<u64> {
        let bytes = self.encode()?;
        let version = match mode {
            IndexWriteMode::Overwrite => store.put(key, bytes)?,
            IndexWriteMode::Versioned => store
                .put_if_version(key, self.version, bytes)
                .map_err(|e| match e {
                    StoreError::VersionMismatch {
                        key,
                        expected,
                        actual,
                    } => RecordError::IndexConflict {
                        key,
                        expected,
                        actual,
                    },
                    other => RecordError::Store(other),
                })?,
        };
        self.version = Some(version);
        Ok(version)
    }
}

/// Result of comparing the index with the records it points at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexAudit {
    /// Number of index entries, counting duplicates
    pub entries: usize,
    /// Indexed names with no record stored under them
    pub dangling: Vec<String>,
    /// Names listed more than once (each reported once)
    pub duplicates: Vec<String>,
}

impl IndexAudit {
    /// Whether the index matches the stored records.
    pub fn is_consistent(&self) -> bool {
        self.dangling.is_empty() && self.duplicates.is_empty()
    }
}
