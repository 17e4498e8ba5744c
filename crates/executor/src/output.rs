//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant. [`Output::into_payload`]
//! flattens an output to the bytes handed back to the host.

use serde::{Deserialize, Serialize};
use userledger_records::IndexAudit;

use crate::Result;

/// Successful command execution results.
///
/// # Example
///
/// ```text
/// match executor.execute(Command::Read { key: "alice".into() })? {
///     Output::Bytes(Some(b)) => println!("Found {} bytes", b.len()),
///     Output::Bytes(None) => println!("Not found"),
///     _ => unreachable!("Read always returns Bytes"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// No return value (writes)
    Unit,

    /// Raw stored bytes, `None` if the key is absent
    Bytes(Option<Vec<u8>>),

    /// Boolean result
    Bool(bool),

    /// List of user names
    Names(Vec<String>),

    /// Index audit report
    Audit(IndexAudit),
}

impl Output {
    /// The bytes returned to the host for this output.
    ///
    /// - `Unit` and `Bytes(None)`: nothing
    /// - `Bytes(Some(b))`: `b` verbatim
    /// - `Bool`: `true` / `false`
    /// - `Names`, `Audit`: JSON
    pub fn into_payload(self) -> Result<Option<Vec<u8>>> {
        Ok(match self {
            Output::Unit => None,
            Output::Bytes(bytes) => bytes,
            Output::Bool(b) => Some(b.to_string().into_bytes()),
            Output::Names(names) => Some(serde_json::to_vec(&names)?),
            Output::Audit(audit) => Some(serde_json::to_vec(&audit)?),
        })
    }
}
