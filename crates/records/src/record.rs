//! The user record and its canonical encoding
//!
//! Records are stored as a JSON object under the user's name:
//!
//! ```json
//! {"name":"alice","id":1,"phone":5551234,"email":"a@x.com"}
//! ```
//!
//! `id` and `phone` are always JSON numbers and `email` is omitted when
//! absent. [`UserRecord::encode`] is the only routine that produces record
//! bytes.

use serde::{Deserialize, Serialize};

use crate::error::{RecordError, RecordResult};

/// A user record, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique name, also the state store key
    pub name: String,
    /// Numeric id
    pub id: i64,
    /// Numeric phone number
    pub phone: i64,
    /// Optional email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Only the `name` field, decoded leniently.
///
/// Used for the existence probe so payloads written by older encoders
/// (quoted ids, missing fields) still resolve to their name.
#[derive(Deserialize)]
struct NameProbe {
    #[serde(default)]
    name: String,
}

impl UserRecord {
    /// Create a record. An empty `email` counts as no email.
    pub fn new(name: impl Into<String>, id: i64, phone: i64, email: Option<String>) -> Self {
        Self {
            name: name.into(),
            id,
            phone,
            email: email.filter(|e| !e.is_empty()),
        }
    }

    /// Build a record from the raw string arguments of a create call.
    ///
    /// `name`, `id` and `phone` must be non-empty; `id` and `phone` must be
    /// decimal integers. An empty `email` counts as no email.
    pub fn from_args(name: &str, id: &str, phone: &str, email: Option<&str>) -> RecordResult<Self> {
        require_non_empty(name, 1)?;
        require_non_empty(id, 2)?;
        require_non_empty(phone, 3)?;

        let id = parse_int("id", id)?;
        let phone = parse_int("phone", phone)?;
        Ok(Self::new(name, id, phone, email.map(str::to_string)))
    }

    /// Canonical byte encoding.
    pub fn encode(&self) -> RecordResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Strict decode of a stored payload.
    pub fn decode(bytes: &[u8]) -> RecordResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// The `name` a stored payload resolves to, if any.
    ///
    /// Returns `None` for payloads that are not JSON objects or have no
    /// non-empty `name` string.
    pub fn probe_name(bytes: &[u8]) -> Option<String> {
        serde_json::from_slice::<NameProbe>(bytes)
            .ok()
            .map(|p| p.name)
            .filter(|n| !n.is_empty())
    }
}

fn require_non_empty(arg: &str, position: usize) -> RecordResult<()> {
    if arg.is_empty() {
        let ordinal = match position {
            1 => "1st",
            2 => "2nd",
            3 => "3rd",
            _ => "4th",
        };
        return Err(RecordError::invalid_argument(format!(
            "{} argument must be a non-empty string",
            ordinal
        )));
    }
    Ok(())
}

fn parse_int(field: &str, raw: &str) -> RecordResult<i64> {
    raw.parse::<i64>().map_err(|_| {
        RecordError::invalid_argument(format!("{} must be an integer, got '{}'", field, raw))
    })
}
