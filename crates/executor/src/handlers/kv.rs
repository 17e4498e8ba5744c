//! Raw key/value handlers.
//!
//! These bypass the user record schema and the index entirely.

use userledger_records::RecordStore;

use crate::{Output, Result};

/// Handle Write command.
pub fn write(r: &RecordStore, key: String, value: String) -> Result<Output> {
    r.raw_write(&key, value.into_bytes())?;
    Ok(Output::Unit)
}

/// Handle Read command.
pub fn read(r: &RecordStore, key: String) -> Result<Output> {
    Ok(Output::Bytes(r.read(&key)?))
}

/// Handle Exists command.
pub fn exists(r: &RecordStore, key: String) -> Result<Output> {
    Ok(Output::Bool(r.exists(&key)?))
}
