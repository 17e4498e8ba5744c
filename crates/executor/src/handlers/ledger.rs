//! Ledger bootstrap handler.

use userledger_records::RecordStore;

use crate::{Output, Result};

/// Handle Init command.
pub fn init(r: &RecordStore, value: i64) -> Result<Output> {
    r.init(value)?;
    Ok(Output::Unit)
}
