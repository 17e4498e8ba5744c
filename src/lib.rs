//! userledger - user record chaincode over a ledger state store
//!
//! The ledger platform calls into the chaincode with a function name and a
//! flat list of string arguments; the chaincode validates them, reads or
//! writes the platform's key-value store, and keeps an index of user names.
//!
//! # Quick Start
//!
//! ```ignore
//! use userledger::Ledger;
//!
//! let ledger = Ledger::in_memory();
//! ledger.init(100)?;
//! ledger.create_user("alice", 1, 5551234, None)?;
//! assert_eq!(ledger.list_users()?, vec!["alice"]);
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which exposes the host
//! entry points (`invoke`, `query`) and typed [`Command`] execution.
//! The state store is supplied by the caller as an `Arc<dyn StateStore>`.

// Re-export the public API from userledger-executor
pub use userledger_executor::*;
