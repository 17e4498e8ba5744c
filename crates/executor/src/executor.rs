//! The Executor - single entry point to the chaincode.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! record facade and converts results to outputs.

use std::sync::Arc;

use userledger_core::StateStore;
use userledger_records::{LedgerConfig, RecordStore};

use crate::handlers;
use crate::{Command, Error, Output, Result};

/// The command executor.
///
/// The Executor is **stateless**: it holds the record facade, which in turn
/// holds only a store handle and configuration. All state lives in the store.
///
/// # Thread Safety
///
/// Executor is `Send + Sync`. It does not serialize invocations; isolation
/// between concurrent calls is up to the state store.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use userledger_executor::{Executor, MemoryStore};
///
/// let executor = Executor::new(Arc::new(MemoryStore::new()));
///
/// executor.invoke("init", &["100"])?;
/// executor.invoke("createUser", &["alice", "1", "5551234"])?;
/// let raw = executor.query("read", &["alice"])?;
/// ```
pub struct Executor {
    records: RecordStore,
}

impl Executor {
    /// Create an executor over a state store with the default configuration.
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self {
            records: RecordStore::new(store),
        }
    }

    /// Create an executor with an explicit configuration.
    pub fn with_config(store: Arc<dyn StateStore>, config: LedgerConfig) -> Result<Self> {
        Ok(Self {
            records: RecordStore::with_config(store, config)?,
        })
    }

    /// The record facade commands run against.
    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    /// Execute a single command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let r = &self.records;
        match cmd {
            Command::Init { value } => handlers::ledger::init(r, value),
            Command::Write { key, value } => handlers::kv::write(r, key, value),
            Command::Read { key } => handlers::kv::read(r, key),
            Command::Exists { key } => handlers::kv::exists(r, key),
            Command::CreateUser {
                name,
                id,
                phone,
                email,
            } => handlers::user::create(r, name, id, phone, email),
            Command::Delete { name } => handlers::user::delete(r, name),
            Command::ListUsers => handlers::user::list(r),
            Command::AuditIndex => handlers::user::audit(r),
        }
    }

    /// Execute commands in order, one result per command.
    ///
    /// Not atomic: a failing command does not undo earlier ones, and later
    /// commands still run.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// Host entry point for state-changing invocations.
    ///
    /// Accepts every function. Returns the payload for reads and `None`
    /// for writes.
    pub fn invoke<S: AsRef<str>>(&self, function: &str, args: &[S]) -> Result<Option<Vec<u8>>> {
        tracing::info!(target: "userledger::executor", function, "invoke is running");
        self.dispatch("invoke", function, args)
    }

    /// Host entry point for read-only queries.
    ///
    /// Write functions are not visible here and fail with `UnknownOperation`.
    pub fn query<S: AsRef<str>>(&self, function: &str, args: &[S]) -> Result<Option<Vec<u8>>> {
        tracing::info!(target: "userledger::executor", function, "query is running");
        if !Command::is_read_function(function) {
            return Err(self.unknown("query", function));
        }
        self.dispatch("query", function, args)
    }

    fn dispatch<S: AsRef<str>>(
        &self,
        entry: &'static str,
        function: &str,
        args: &[S],
    ) -> Result<Option<Vec<u8>>> {
        let cmd = match Command::from_invocation(function, args) {
            Ok(cmd) => cmd,
            Err(Error::UnknownOperation { .. }) => return Err(self.unknown(entry, function)),
            Err(e) => return Err(e),
        };
        let result = self.execute(cmd).and_then(Output::into_payload);
        if let Err(e) = &result {
            tracing::debug!(
                target: "userledger::executor",
                entry,
                function,
                error = %e,
                "Invocation failed"
            );
        }
        result
    }

    fn unknown(&self, entry: &'static str, function: &str) -> Error {
        tracing::warn!(
            target: "userledger::executor",
            entry,
            function,
            "Did not find function"
        );
        Error::UnknownOperation {
            function: function.to_string(),
        }
    }
}
