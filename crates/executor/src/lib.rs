//! # User Ledger Executor
//!
//! The public API for the user ledger chaincode. It provides:
//! - [`Ledger`] - typed convenience wrapper over an in-memory or supplied store
//! - [`Command`]/[`Output`] - the instruction set and its results
//! - [`Executor`] - dispatch, plus the host-facing `invoke`/`query` entry points
//!
//! ## Quick Start
//!
//! ```text
//! use userledger_executor::Ledger;
//!
//! let ledger = Ledger::in_memory();
//! ledger.init(100)?;
//! ledger.create_user("alice", 1, 5551234, None)?;
//! let raw = ledger.read("alice")?;
//! ```
//!
//! ## Host invocation
//!
//! The ledger platform calls in with a function name and a flat list of
//! string arguments:
//!
//! | Function | Args | Entry point |
//! |----------|------|-------------|
//! | `init` | value | invoke |
//! | `write` | key, value | invoke |
//! | `createUser` / `userLogin` / `init_login` | name, id, phone, [email] | invoke |
//! | `delete` | name | invoke |
//! | `read` | key | invoke, query |
//! | `exists` | key | invoke, query |
//! | `listUsers` | | invoke, query |
//! | `auditIndex` | | invoke, query |

#![warn(missing_docs)]

mod api;
mod command;
mod convert;
mod error;
mod executor;
mod output;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

pub use api::Ledger;
pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use output::Output;

// Re-export so users don't need the lower crates directly
pub use userledger_core::{StateStore, StoreError, Versioned};
pub use userledger_records::{IndexAudit, LedgerConfig, RecordStore, UserRecord};
pub use userledger_storage::MemoryStore;

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
