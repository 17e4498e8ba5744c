//! FaultyStore: fault injection around any state store
//!
//! Failures are armed per operation, optionally restricted to a single key,
//! and optionally delayed by a number of matching calls. A triggered fault
//! is consumed, so the next matching call succeeds unless re-armed.

use std::sync::Arc;

use parking_lot::Mutex;

use userledger_core::{StateStore, StoreError, StoreResult, Versioned};

/// Store operation a fault can be armed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `get`, `get_versioned`, `exists`
    Get,
    /// `put`, `put_if_version`
    Put,
    /// `delete`
    Delete,
}

impl Op {
    fn name(self) -> &'static str {
        match self {
            Op::Get => "get",
            Op::Put => "put",
            Op::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone)]
struct Fault {
    op: Op,
    key: Option<String>,
    /// Matching calls to let through before failing
    skip: usize,
}

/// Wrapper that fails selected operations with [`StoreError::Unavailable`].
pub struct FaultyStore<S> {
    inner: Arc<S>,
    faults: Mutex<Vec<Fault>>,
}

impl<S: StateStore> FaultyStore<S> {
    /// Wrap a store; no faults are armed.
    pub fn new(inner: Arc<S>) -> Self {
        Self {
            inner,
            faults: Mutex::new(Vec::new()),
        }
    }

    /// The wrapped store, for inspecting state behind the faults.
    pub fn inner(&self) -> &Arc<S> {
        &self.inner
    }

    /// Fail the next `op` on any key.
    pub fn fail_next(&self, op: Op) {
        self.arm(op, None, 0);
    }

    /// Fail the next `op` on `key`.
    pub fn fail_next_on(&self, op: Op, key: &str) {
        self.arm(op, Some(key.to_string()), 0);
    }

    /// Let `skip` matching calls through, then fail the next one.
    pub fn fail_after(&self, op: Op, key: Option<&str>, skip: usize) {
        self.arm(op, key.map(str::to_string), skip);
    }

    /// Disarm all pending faults.
    pub fn clear(&self) {
        self.faults.lock().clear();
    }

    fn arm(&self, op: Op, key: Option<String>, skip: usize) {
        self.faults.lock().push(Fault { op, key, skip });
    }

    fn check(&self, op: Op, key: &str) -> StoreResult<()> {
        let mut faults = self.faults.lock();
        let hit = faults
            .iter()
            .position(|f| f.op == op && f.key.as_deref().map_or(true, |k| k == key));
        if let Some(pos) = hit {
            if faults[pos].skip > 0 {
                faults[pos].skip -= 1;
                return Ok(());
            }
            faults.remove(pos);
            tracing::debug!(
                target: "userledger::storage",
                op = op.name(),
                key,
                "Injected store fault"
            );
            return Err(StoreError::unavailable(op.name(), key, "injected fault"));
        }
        Ok(())
    }
}

impl<S: StateStore> StateStore for FaultyStore<S> {
    fn get_versioned(&self, key: &str) -> StoreResult<Option<Versioned>> {
        self.check(Op::Get, key)?;
        self.inner.get_versioned(key)
    }

    fn put(&self, key: &str, value: Vec<u8>) -> StoreResult<u64> {
        self.check(Op::Put, key)?;
        self.inner.put(key, value)
    }

    fn put_if_version(&self, key: &str, expected: Option<u64>, value: Vec<u8>) -> StoreResult<u64> {
        self.check(Op::Put, key)?;
        self.inner.put_if_version(key, expected, value)
    }

    fn delete(&self, key: &str) -> StoreResult<bool> {
        self.check(Op::Delete, key)?;
        self.inner.delete(key)
    }
}
