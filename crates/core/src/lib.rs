//! Core types and traits for the user ledger
//!
//! This crate defines the boundary between the chaincode logic and the
//! ledger platform's state store:
//! - StateStore: the key-value collaborator every operation runs against
//! - Versioned: a stored value together with its store-assigned version
//! - StoreError: failures reported by a state store
//! - Limits: key size limits enforced before touching the store

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use limits::{LimitError, Limits};
pub use traits::{StateStore, Versioned};
