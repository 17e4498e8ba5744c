//! Error conversion from record-layer errors.

use userledger_core::StoreError;
use userledger_records::RecordError;

use crate::Error;

impl From<RecordError> for Error {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::InvalidArgument(reason) => Error::InvalidArgument { reason },
            RecordError::DuplicateEntity(name) => Error::DuplicateEntity { name },
            RecordError::Store(e) => e.into(),
            RecordError::CorruptIndex { key, reason } => Error::CorruptIndex { key, reason },
            RecordError::IndexConflict {
                key,
                expected,
                actual,
            } => Error::IndexConflict {
                key,
                expected,
                actual,
            },
            RecordError::Serialization(reason) => Error::Serialization { reason },
            RecordError::Config(reason) => Error::Config { reason },
        }
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Error::StoreUnavailable {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            reason: err.to_string(),
        }
    }
}
