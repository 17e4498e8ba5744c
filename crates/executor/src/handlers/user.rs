//! User record handlers.

use userledger_records::{RecordStore, UserRecord};

use crate::{Output, Result};

/// Handle CreateUser command.
pub fn create(
    r: &RecordStore,
    name: String,
    id: i64,
    phone: i64,
    email: Option<String>,
) -> Result<Output> {
    r.create(UserRecord::new(name, id, phone, email))?;
    Ok(Output::Unit)
}

/// Handle Delete command.
pub fn delete(r: &RecordStore, name: String) -> Result<Output> {
    r.delete(&name)?;
    Ok(Output::Unit)
}

/// Handle ListUsers command.
pub fn list(r: &RecordStore) -> Result<Output> {
    Ok(Output::Names(r.list_users()?))
}

/// Handle AuditIndex command.
pub fn audit(r: &RecordStore) -> Result<Output> {
    Ok(Output::Audit(r.audit_index()?))
}
