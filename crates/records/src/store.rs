//! RecordStore: user records and their index over a state store
//!
//! ## Design
//!
//! RecordStore is a stateless facade. It holds an `Arc<dyn StateStore>`
//! and an immutable config; every operation reads and writes the store
//! directly and keeps nothing between calls.
//!
//! ## Write ordering
//!
//! - `create`: probe record key, put record, load index, append, save index
//! - `delete`: delete record key, load index, remove first match, save index
//!
//! The record write and the index write are separate store calls. If the
//! second fails the first stays in place.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use userledger_core::{Limits, StateStore};

use crate::config::{IndexWriteMode, LedgerConfig};
use crate::error::{RecordError, RecordResult};
use crate::index::{IndexAudit, UserIndex};
use crate::record::UserRecord;

/// User record facade.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use userledger_records::{RecordStore, UserRecord};
/// use userledger_storage::MemoryStore;
///
/// let records = RecordStore::new(Arc::new(MemoryStore::new()));
/// records.init(100)?;
/// records.create(UserRecord::new("alice", 1, 5551234, None))?;
/// assert_eq!(records.list_users()?, vec!["alice"]);
/// ```
#[derive(Clone)]
pub struct RecordStore {
    store: Arc<dyn StateStore>,
    config: LedgerConfig,
    mode: IndexWriteMode,
    limits: Limits,
}

impl RecordStore {
    /// Create a facade with the default configuration.
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        let config = LedgerConfig::default();
        Self {
            store,
            limits: config.limits(),
            mode: IndexWriteMode::Overwrite,
            config,
        }
    }

    /// Create a facade with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Config` if the configuration is invalid.
    pub fn with_config(store: Arc<dyn StateStore>, config: LedgerConfig) -> RecordResult<Self> {
        config.validate()?;
        Ok(Self {
            store,
            mode: config.index_write_mode()?,
            limits: config.limits(),
            config,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Write `value` under the diagnostic key and reset the index to empty.
    ///
    /// Any previous index contents are discarded; records themselves are
    /// left untouched.
    pub fn init(&self, value: i64) -> RecordResult<()> {
        self.store
            .put(&self.config.diagnostic_key, value.to_string().into_bytes())?;
        UserIndex::empty().save(
            self.store.as_ref(),
            &self.config.index_key,
            IndexWriteMode::Overwrite,
        )?;
        tracing::info!(
            target: "userledger::records",
            diagnostic_key = %self.config.diagnostic_key,
            value,
            "Ledger initialized, index reset"
        );
        Ok(())
    }

    /// Create a user record and append its name to the index.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the name is empty, too long, or a reserved key
    /// - `DuplicateEntity` if a record resolving to the same name exists
    /// - `Store` if any store call fails
    /// - `CorruptIndex` if the index is missing or undecodable
    /// - `IndexConflict` if the index changed concurrently (versioned mode)
    pub fn create(&self, mut record: UserRecord) -> RecordResult<()> {
        // fields are public, so a literal can bypass `UserRecord::new`
        record.email = record.email.filter(|e| !e.is_empty());
        let name = record.name.as_str();
        self.limits.validate_key(name)?;
        if name == self.config.index_key || name == self.config.diagnostic_key {
            return Err(RecordError::invalid_argument(format!(
                "'{}' is a reserved key",
                name
            )));
        }

        if let Some(existing) = self.store.get(name)? {
            if UserRecord::probe_name(&existing).as_deref() == Some(name) {
                return Err(RecordError::DuplicateEntity(name.to_string()));
            }
            if !existing.is_empty() {
                tracing::warn!(
                    target: "userledger::records",
                    name,
                    bytes = existing.len(),
                    "Overwriting non-record payload with new user record"
                );
            }
        }

        self.store.put(name, record.encode()?)?;

        let mut index = UserIndex::load(self.store.as_ref(), &self.config.index_key)?;
        index.push(name);
        index.save(self.store.as_ref(), &self.config.index_key, self.mode)?;

        tracing::debug!(
            target: "userledger::records",
            name,
            index_len = index.len(),
            "User created"
        );
        Ok(())
    }

    /// Raw bytes stored under `key`, or `None` if absent.
    ///
    /// No decoding happens here; the payload may not be a record.
    pub fn read(&self, key: &str) -> RecordResult<Option<Vec<u8>>> {
        self.limits.validate_key(key)?;
        Ok(self.store.get(key)?)
    }

    /// Decode the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the stored payload is not a canonical record.
    pub fn get_user(&self, name: &str) -> RecordResult<Option<UserRecord>> {
        self.read(name)?
            .map(|bytes| UserRecord::decode(&bytes))
            .transpose()
    }

    /// Overwrite `key` with `value`, with no schema or index checks.
    pub fn raw_write(&self, key: &str, value: Vec<u8>) -> RecordResult<()> {
        self.limits.validate_key(key)?;
        self.store.put(key, value)?;
        Ok(())
    }

    /// Delete the record under `name` and remove the first matching index entry.
    ///
    /// Deleting a name that was never created succeeds and leaves the index
    /// as it was. Returns whether a value was stored under `name`.
    pub fn delete(&self, name: &str) -> RecordResult<bool> {
        self.limits.validate_key(name)?;
        let existed = self.store.delete(name)?;

        let mut index = UserIndex::load(self.store.as_ref(), &self.config.index_key)?;
        if index.remove_first(name) {
            index.save(self.store.as_ref(), &self.config.index_key, self.mode)?;
            if index.contains(name) {
                tracing::warn!(
                    target: "userledger::records",
                    name,
                    "Index still lists deleted user; duplicate entries present"
                );
            }
        }

        tracing::debug!(
            target: "userledger::records",
            name,
            existed,
            index_len = index.len(),
            "User deleted"
        );
        Ok(existed)
    }

    /// Whether any value is stored under `key`.
    pub fn exists(&self, key: &str) -> RecordResult<bool> {
        self.limits.validate_key(key)?;
        Ok(self.store.exists(key)?)
    }

    /// Names in the index, in insertion order.
    pub fn list_users(&self) -> RecordResult<Vec<String>> {
        Ok(UserIndex::load(self.store.as_ref(), &self.config.index_key)?.into_names())
    }

    /// Compare the index with the stored records.
    pub fn audit_index(&self) -> RecordResult<IndexAudit> {
        let index = UserIndex::load(self.store.as_ref(), &self.config.index_key)?;

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for name in index.names() {
            *counts.entry(name.as_str()).or_default() += 1;
        }

        let mut seen = HashSet::new();
        let mut dangling = Vec::new();
        for name in index.names() {
            if seen.insert(name.as_str()) && !self.store.exists(name)? {
                dangling.push(name.clone());
            }
        }

        let duplicates: Vec<String> = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(name, _)| name.to_string())
            .collect();

        let audit = IndexAudit {
            entries: index.len(),
            dangling,
            duplicates,
        };
        if !audit.is_consistent() {
            tracing::warn!(
                target: "userledger::records",
                dangling = audit.dangling.len(),
                duplicates = audit.duplicates.len(),
                "Index out of step with stored records"
            );
        }
        Ok(audit)
    }
}
