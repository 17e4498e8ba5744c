//! Command enum defining all ledger operations.
//!
//! Commands are the instruction set of the chaincode. The host calls in with
//! a function name and a flat list of strings; [`Command::from_invocation`]
//! checks arity, parses numbers, and produces a typed command. Commands are
//! also serializable, for callers that build them directly.

use serde::{Deserialize, Serialize};
use userledger_records::UserRecord;

use crate::{Error, Result};

/// Function names that only read state.
const READ_FUNCTIONS: &[&str] = &["read", "exists", "listUsers", "auditIndex"];

/// A self-contained, serializable ledger operation.
///
/// # Example
///
/// ```ignore
/// use userledger_executor::Command;
///
/// let cmd = Command::from_invocation("createUser", &["alice", "1", "5551234"])?;
/// assert_eq!(cmd, Command::CreateUser {
///     name: "alice".into(),
///     id: 1,
///     phone: 5551234,
///     email: None,
/// });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Write the diagnostic value and reset the index.
    /// Returns: `Output::Unit`
    Init { value: i64 },

    /// Overwrite an arbitrary key.
    /// Returns: `Output::Unit`
    Write { key: String, value: String },

    /// Raw bytes stored under a key.
    /// Returns: `Output::Bytes`
    Read { key: String },

    /// Create a user record and index it.
    /// Returns: `Output::Unit`
    CreateUser {
        name: String,
        id: i64,
        phone: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        email: Option<String>,
    },

    /// Delete a user record and its index entry.
    /// Returns: `Output::Unit`
    Delete { name: String },

    /// Whether any value is stored under a key.
    /// Returns: `Output::Bool`
    Exists { key: String },

    /// Names in the index.
    /// Returns: `Output::Names`
    ListUsers,

    /// Compare the index with stored records.
    /// Returns: `Output::Audit`
    AuditIndex,
}

impl Command {
    /// Build a command from a host invocation.
    ///
    /// # Errors
    ///
    /// - `UnknownOperation` if `function` is not recognised
    /// - `InvalidArgument` on wrong arity or unparsable numbers
    pub fn from_invocation<S: AsRef<str>>(function: &str, args: &[S]) -> Result<Self> {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        match function {
            "init" => {
                expect_args(&args, 1)?;
                let value = args[0].parse::<i64>().map_err(|_| {
                    Error::invalid_argument(format!(
                        "expecting integer value for init, got '{}'",
                        args[0]
                    ))
                })?;
                Ok(Command::Init { value })
            }
            "write" => {
                expect_args(&args, 2)?;
                Ok(Command::Write {
                    key: args[0].to_string(),
                    value: args[1].to_string(),
                })
            }
            "read" => {
                expect_args(&args, 1)?;
                Ok(Command::Read {
                    key: args[0].to_string(),
                })
            }
            "createUser" | "userLogin" | "init_login" => {
                if !(3..=4).contains(&args.len()) {
                    return Err(Error::invalid_argument(format!(
                        "incorrect number of arguments: expecting 3 or 4, got {}",
                        args.len()
                    )));
                }
                let record = UserRecord::from_args(args[0], args[1], args[2], args.get(3).copied())?;
                Ok(Command::CreateUser {
                    name: record.name,
                    id: record.id,
                    phone: record.phone,
                    email: record.email,
                })
            }
            "delete" => {
                expect_args(&args, 1)?;
                Ok(Command::Delete {
                    name: args[0].to_string(),
                })
            }
            "exists" => {
                expect_args(&args, 1)?;
                Ok(Command::Exists {
                    key: args[0].to_string(),
                })
            }
            "listUsers" => {
                expect_args(&args, 0)?;
                Ok(Command::ListUsers)
            }
            "auditIndex" => {
                expect_args(&args, 0)?;
                Ok(Command::AuditIndex)
            }
            other => Err(Error::UnknownOperation {
                function: other.to_string(),
            }),
        }
    }

    /// Whether `function` names a read-only operation.
    pub fn is_read_function(function: &str) -> bool {
        READ_FUNCTIONS.contains(&function)
    }

    /// Canonical function name for this command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Init { .. } => "init",
            Command::Write { .. } => "write",
            Command::Read { .. } => "read",
            Command::CreateUser { .. } => "createUser",
            Command::Delete { .. } => "delete",
            Command::Exists { .. } => "exists",
            Command::ListUsers => "listUsers",
            Command::AuditIndex => "auditIndex",
        }
    }

    /// Whether this command writes to the state store.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::Init { .. }
                | Command::Write { .. }
                | Command::CreateUser { .. }
                | Command::Delete { .. }
        )
    }
}

fn expect_args(args: &[&str], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(Error::invalid_argument(format!(
            "incorrect number of arguments: expecting {}, got {}",
            expected,
            args.len()
        )));
    }
    Ok(())
}
