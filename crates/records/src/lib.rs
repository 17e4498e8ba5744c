//! User records over a ledger state store
//!
//! [`RecordStore`] is a stateless facade: it maps user names to state
//! store keys, encodes records with one canonical JSON routine, and keeps
//! a hand-maintained [`UserIndex`] of the names it has created.
//!
//! ## Consistency
//!
//! Creating or deleting a user takes two independent writes (record, then
//! index). A failure between them leaves the index out of step with the
//! records; [`RecordStore::audit_index`] reports such drift but nothing
//! repairs it automatically.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod index;
pub mod record;
pub mod store;

pub use config::{IndexWriteMode, LedgerConfig, CONFIG_FILE_NAME};
pub use error::{RecordError, RecordResult};
pub use index::{IndexAudit, UserIndex};
pub use record::UserRecord;
pub use store::RecordStore;
