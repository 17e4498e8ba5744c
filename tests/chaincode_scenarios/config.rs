//! Configuration loaded from disk.

use std::sync::Arc;

use tempfile::TempDir;
use userledger::{Error, Executor, LedgerConfig, MemoryStore, StateStore};
use userledger_records::CONFIG_FILE_NAME;

#[test]
fn custom_keys_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        "index_key = \"users\"\ndiagnostic_key = \"health\"\n",
    )
    .unwrap();

    let config = LedgerConfig::from_file(&path).unwrap();
    let store = Arc::new(MemoryStore::new());
    let executor = Executor::with_config(store.clone(), config).unwrap();

    executor.invoke("init", &["1"]).unwrap();
    executor.invoke("createUser", &["alice", "1", "1"]).unwrap();

    assert_eq!(store.get("health").unwrap(), Some(b"1".to_vec()));
    assert_eq!(store.get("users").unwrap(), Some(b"[\"alice\"]".to_vec()));

    // the configured index key is reserved
    assert!(matches!(
        executor.invoke("createUser", &["users", "2", "2"]),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn default_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    LedgerConfig::write_default_if_missing(&path).unwrap();
    assert_eq!(LedgerConfig::from_file(&path).unwrap(), LedgerConfig::default());
}
