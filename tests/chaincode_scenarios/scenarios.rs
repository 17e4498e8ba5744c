//! Documented walkthroughs of the chaincode lifecycle.

use crate::common::*;
use userledger::{Error, StateStore, UserRecord};

#[test]
fn init_create_read_delete_walkthrough() {
    let (store, executor) = ledger();

    // init("100")
    assert_eq!(store.get("abc").unwrap(), Some(b"100".to_vec()));
    assert_eq!(store.get("_userindex").unwrap(), Some(b"[]".to_vec()));

    // create("alice", 1, 5551234)
    executor
        .invoke("createUser", &["alice", "1", "5551234"])
        .unwrap();
    assert_eq!(
        read_user(&executor, "alice"),
        Some(UserRecord::new("alice", 1, 5551234, None))
    );
    assert_eq!(users(&executor), vec!["alice"]);

    // delete("alice")
    executor.invoke("delete", &["alice"]).unwrap();
    assert_eq!(executor.query("read", &["alice"]).unwrap(), None);
    assert!(users(&executor).is_empty());
}

#[test]
fn duplicate_create_keeps_first_record() {
    let (_store, executor) = ledger();

    executor
        .invoke("createUser", &["bob", "2", "5559999", "b@x.com"])
        .unwrap();
    let err = executor
        .invoke("createUser", &["bob", "3", "0000000", "x@x.com"])
        .unwrap_err();

    assert_eq!(err, Error::DuplicateEntity { name: "bob".into() });
    assert_eq!(
        read_user(&executor, "bob"),
        Some(UserRecord::new("bob", 2, 5559999, Some("b@x.com".into())))
    );
    assert_eq!(users(&executor), vec!["bob"]);
}

#[test]
fn delete_of_never_created_name_leaves_index() {
    let (store, executor) = ledger();
    executor.invoke("createUser", &["alice", "1", "1"]).unwrap();
    let before = store.get_versioned("_userindex").unwrap();

    executor.invoke("delete", &["nobody"]).unwrap();

    assert_eq!(store.get_versioned("_userindex").unwrap(), before);
}

#[test]
fn raw_write_is_independent_of_records() {
    let (_store, executor) = ledger();
    executor.invoke("write", &["scratch", "{not a record"]).unwrap();

    assert_eq!(
        executor.query("read", &["scratch"]).unwrap(),
        Some(b"{not a record".to_vec())
    );
    assert!(users(&executor).is_empty());
}

#[test]
fn raw_write_can_update_a_record() {
    let (_store, executor) = ledger();
    executor.invoke("createUser", &["alice", "1", "1"]).unwrap();

    let updated = UserRecord::new("alice", 1, 2222, Some("a@x.com".into()));
    let json = String::from_utf8(updated.encode().unwrap()).unwrap();
    executor.invoke("write", &["alice", json.as_str()]).unwrap();

    assert_eq!(read_user(&executor, "alice"), Some(updated));
    assert_eq!(users(&executor), vec!["alice"]);
}

#[test]
fn init_again_forgets_index_but_not_records() {
    let (_store, executor) = ledger();
    executor.invoke("createUser", &["alice", "1", "1"]).unwrap();
    executor.invoke("init", &["7"]).unwrap();

    assert!(users(&executor).is_empty());
    assert!(read_user(&executor, "alice").is_some());
    assert_eq!(
        executor.query("read", &["abc"]).unwrap(),
        Some(b"7".to_vec())
    );

    // the record still blocks a re-create even though it is unindexed
    assert!(matches!(
        executor.invoke("createUser", &["alice", "9", "9"]),
        Err(Error::DuplicateEntity { .. })
    ));
}

#[test]
fn many_users_index_in_order() {
    let (_store, executor) = ledger();
    let names: Vec<String> = (0..20).map(|i| format!("user{:02}", i)).collect();
    for (i, name) in names.iter().enumerate() {
        let id = i.to_string();
        executor
            .invoke("createUser", &[name.as_str(), id.as_str(), "5550000"])
            .unwrap();
    }
    assert_eq!(users(&executor), names);

    for name in names.iter().step_by(2) {
        executor.invoke("delete", &[name.as_str()]).unwrap();
    }
    let expected: Vec<String> = names.iter().skip(1).step_by(2).cloned().collect();
    assert_eq!(users(&executor), expected);

    let audit = executor.records().audit_index().unwrap();
    assert!(audit.is_consistent());
    assert_eq!(audit.entries, 10);
}
