//! Store failures: errors are terminal and earlier writes are not undone.

use crate::common::*;
use userledger::{Error, StateStore};
use userledger_storage::Op;

#[test]
fn read_failure_is_store_unavailable() {
    let (store, executor) = faulty_ledger();
    store.fail_next_on(Op::Get, "alice");

    let err = executor.query("read", &["alice"]).unwrap_err();
    assert!(matches!(err, Error::StoreUnavailable { .. }));
}

#[test]
fn existence_probe_failure_aborts_create() {
    let (store, executor) = faulty_ledger();
    store.fail_next_on(Op::Get, "alice");

    let err = executor
        .invoke("createUser", &["alice", "1", "1"])
        .unwrap_err();
    assert!(matches!(err, Error::StoreUnavailable { .. }));
    assert!(!store.inner().exists("alice").unwrap());
    assert!(users(&executor).is_empty());
}

#[test]
fn index_write_failure_leaves_unindexed_record() {
    let (store, executor) = faulty_ledger();
    store.fail_next_on(Op::Put, "_userindex");

    assert!(executor.invoke("createUser", &["alice", "1", "1"]).is_err());

    // record landed, index did not
    assert!(read_user(&executor, "alice").is_some());
    assert!(users(&executor).is_empty());
}

#[test]
fn index_write_failure_on_delete_leaves_dangling_entry() {
    let (store, executor) = faulty_ledger();
    executor.invoke("createUser", &["alice", "1", "1"]).unwrap();
    store.fail_next_on(Op::Put, "_userindex");

    assert!(executor.invoke("delete", &["alice"]).is_err());

    assert_eq!(executor.query("read", &["alice"]).unwrap(), None);
    let audit = executor.records().audit_index().unwrap();
    assert_eq!(audit.dangling, vec!["alice"]);
}

#[test]
fn record_delete_failure_touches_nothing() {
    let (store, executor) = faulty_ledger();
    executor.invoke("createUser", &["alice", "1", "1"]).unwrap();
    store.fail_next(Op::Delete);

    assert!(matches!(
        executor.invoke("delete", &["alice"]),
        Err(Error::StoreUnavailable { .. })
    ));
    assert!(read_user(&executor, "alice").is_some());
    assert_eq!(users(&executor), vec!["alice"]);
}

#[test]
fn corrupt_index_is_not_reset() {
    let (store, executor) = faulty_ledger();
    executor.invoke("write", &["_userindex", "oops"]).unwrap();

    let err = executor
        .invoke("createUser", &["alice", "1", "1"])
        .unwrap_err();
    assert!(matches!(err, Error::CorruptIndex { .. }));
    assert_eq!(store.get("_userindex").unwrap(), Some(b"oops".to_vec()));
}

#[test]
fn init_index_reset_failure_keeps_diagnostic_write() {
    let (store, executor) = faulty_ledger();
    store.fail_next_on(Op::Put, "_userindex");

    assert!(executor.invoke("init", &["42"]).is_err());
    assert_eq!(store.get("abc").unwrap(), Some(b"42".to_vec()));
}
