//! Typed convenience wrapper over the executor.

use std::sync::Arc;

use userledger_core::StateStore;
use userledger_records::{IndexAudit, LedgerConfig, UserRecord};
use userledger_storage::MemoryStore;

use crate::{Command, Error, Executor, Output, Result};

/// High-level ledger handle.
///
/// Each method builds a [`Command`] and runs it through the [`Executor`],
/// so behavior is identical to the host invocation path.
pub struct Ledger {
    executor: Executor,
}

impl Ledger {
    /// A ledger over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// A ledger over a supplied store with the default configuration.
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self {
            executor: Executor::new(store),
        }
    }

    /// A ledger over a supplied store with an explicit configuration.
    pub fn with_config(store: Arc<dyn StateStore>, config: LedgerConfig) -> Result<Self> {
        Ok(Self {
            executor: Executor::with_config(store, config)?,
        })
    }

    /// The underlying executor.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Write the diagnostic value and reset the index.
    pub fn init(&self, value: i64) -> Result<()> {
        self.unit(Command::Init { value })
    }

    /// Create a user record.
    pub fn create_user(&self, name: &str, id: i64, phone: i64, email: Option<&str>) -> Result<()> {
        self.unit(Command::CreateUser {
            name: name.to_string(),
            id,
            phone,
            email: email.map(str::to_string),
        })
    }

    /// Decode the user record stored under `name`.
    pub fn get_user(&self, name: &str) -> Result<Option<UserRecord>> {
        Ok(self.executor.records().get_user(name)?)
    }

    /// Delete a user record.
    pub fn delete_user(&self, name: &str) -> Result<()> {
        self.unit(Command::Delete {
            name: name.to_string(),
        })
    }

    /// Overwrite any key with a string value.
    pub fn write(&self, key: &str, value: &str) -> Result<()> {
        self.unit(Command::Write {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    /// Raw bytes stored under `key`.
    pub fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.executor.execute(Command::Read {
            key: key.to_string(),
        })? {
            Output::Bytes(bytes) => Ok(bytes),
            other => Err(unexpected("Bytes", &other)),
        }
    }

    /// Whether any value is stored under `key`.
    pub fn exists(&self, key: &str) -> Result<bool> {
        match self.executor.execute(Command::Exists {
            key: key.to_string(),
        })? {
            Output::Bool(b) => Ok(b),
            other => Err(unexpected("Bool", &other)),
        }
    }

    /// Names in the index.
    pub fn list_users(&self) -> Result<Vec<String>> {
        match self.executor.execute(Command::ListUsers)? {
            Output::Names(names) => Ok(names),
            other => Err(unexpected("Names", &other)),
        }
    }

    /// Compare the index with stored records.
    pub fn audit_index(&self) -> Result<IndexAudit> {
        match self.executor.execute(Command::AuditIndex)? {
            Output::Audit(audit) => Ok(audit),
            other => Err(unexpected("Audit", &other)),
        }
    }

    fn unit(&self, cmd: Command) -> Result<()> {
        match self.executor.execute(cmd)? {
            Output::Unit => Ok(()),
            other => Err(unexpected("Unit", &other)),
        }
    }
}

fn unexpected(expected: &str, got: &Output) -> Error {
    Error::Internal {
        reason: format!("expected {} output, got {:?}", expected, got),
    }
}
