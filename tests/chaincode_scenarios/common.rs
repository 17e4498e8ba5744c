//! Shared helpers for the scenario suite.

#![allow(dead_code)]

use std::sync::{Arc, Once};

use userledger::{Executor, LedgerConfig, MemoryStore, UserRecord};
use userledger_storage::FaultyStore;

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output to the test harness's captured stdout.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
            .try_init();
    });
}

/// Executor over a fresh store, with `init("100")` already applied.
pub fn ledger() -> (Arc<MemoryStore>, Executor) {
    init_tracing();
    let store = Arc::new(MemoryStore::new());
    let executor = Executor::new(store.clone());
    executor.invoke("init", &["100"]).unwrap();
    (store, executor)
}

/// Same as [`ledger`] with an explicit config.
pub fn ledger_with(config: LedgerConfig) -> (Arc<MemoryStore>, Executor) {
    init_tracing();
    let store = Arc::new(MemoryStore::new());
    let executor = Executor::with_config(store.clone(), config).unwrap();
    executor.invoke("init", &["100"]).unwrap();
    (store, executor)
}

/// Executor over a fault-injecting store, initialized.
pub fn faulty_ledger() -> (Arc<FaultyStore<MemoryStore>>, Executor) {
    init_tracing();
    let store = Arc::new(FaultyStore::new(Arc::new(MemoryStore::new())));
    let executor = Executor::new(store.clone());
    executor.invoke("init", &["100"]).unwrap();
    (store, executor)
}

/// Read and decode a record through the query path.
pub fn read_user(executor: &Executor, name: &str) -> Option<UserRecord> {
    executor
        .query("read", &[name])
        .unwrap()
        .map(|bytes| UserRecord::decode(&bytes).unwrap())
}

/// The index through the query path.
pub fn users(executor: &Executor) -> Vec<String> {
    let payload = executor.query::<&str>("listUsers", &[]).unwrap().unwrap();
    serde_json::from_slice(&payload).unwrap()
}
