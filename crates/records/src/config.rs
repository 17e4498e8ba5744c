//! Chaincode configuration via `userledger.toml`
//!
//! Every field has a default, so an empty file (or no file at all) gives
//! the behavior the ledger has always had: index under `_userindex`,
//! diagnostic value under `abc`, unconditional index writes.

use serde::{Deserialize, Serialize};
use std::path::Path;

use userledger_core::Limits;

use crate::error::{RecordError, RecordResult};

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "userledger.toml";

/// How the index is written back after a read-modify-write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexWriteMode {
    /// Unconditional put. Concurrent creates/deletes can lose an update.
    Overwrite,
    /// Conditional put against the version read. A concurrent change fails
    /// the operation with `IndexConflict` instead of dropping an entry.
    Versioned,
}

/// Configuration loaded from `userledger.toml`.
///
/// # Example
///
/// ```toml
/// index_key = "_userindex"
/// diagnostic_key = "abc"
/// index_writes = "overwrite"   # or "versioned"
/// max_key_bytes = 1024
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Key holding the JSON array of user names.
    #[serde(default = "default_index_key")]
    pub index_key: String,
    /// Key written by `init`.
    #[serde(default = "default_diagnostic_key")]
    pub diagnostic_key: String,
    /// Index write mode: `"overwrite"` or `"versioned"`.
    #[serde(default = "default_index_writes")]
    pub index_writes: String,
    /// Maximum key length in bytes.
    #[serde(default = "default_max_key_bytes")]
    pub max_key_bytes: usize,
}

fn default_index_key() -> String {
    "_userindex".to_string()
}

fn default_diagnostic_key() -> String {
    "abc".to_string()
}

fn default_index_writes() -> String {
    "overwrite".to_string()
}

fn default_max_key_bytes() -> usize {
    Limits::default().max_key_bytes
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            index_key: default_index_key(),
            diagnostic_key: default_diagnostic_key(),
            index_writes: default_index_writes(),
            max_key_bytes: default_max_key_bytes(),
        }
    }
}

impl LedgerConfig {
    /// Parse the `index_writes` string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"overwrite"` or `"versioned"`.
    pub fn index_write_mode(&self) -> RecordResult<IndexWriteMode> {
        match self.index_writes.as_str() {
            "overwrite" => Ok(IndexWriteMode::Overwrite),
            "versioned" => Ok(IndexWriteMode::Versioned),
            other => Err(RecordError::Config(format!(
                "invalid index_writes '{}'. Expected \"overwrite\" or \"versioned\".",
                other
            ))),
        }
    }

    /// Key limits derived from this config.
    pub fn limits(&self) -> Limits {
        Limits::with_max_key_bytes(self.max_key_bytes)
    }

    /// Check every field, so a bad config fails at load rather than on first use.
    pub fn validate(&self) -> RecordResult<()> {
        self.index_write_mode()?;
        if self.max_key_bytes == 0 {
            return Err(RecordError::Config("max_key_bytes must be positive".to_string()));
        }
        let limits = self.limits();
        limits
            .validate_key(&self.index_key)
            .map_err(|e| RecordError::Config(format!("index_key: {}", e)))?;
        limits
            .validate_key(&self.diagnostic_key)
            .map_err(|e| RecordError::Config(format!("diagnostic_key: {}", e)))?;
        if self.index_key == self.diagnostic_key {
            return Err(RecordError::Config(
                "index_key and diagnostic_key must differ".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# User ledger chaincode configuration

# Key holding the JSON array of known user names.
index_key = "_userindex"

# Key written by `init` with its integer argument.
diagnostic_key = "abc"

# Index write mode: "overwrite" (default) or "versioned"
#   "overwrite" = unconditional put, concurrent updates may be lost
#   "versioned" = conditional put, concurrent updates fail with a conflict
index_writes = "overwrite"

# Maximum key length in bytes.
max_key_bytes = 1024
"#
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> RecordResult<Self> {
        let config: LedgerConfig = toml::from_str(content)
            .map_err(|e| RecordError::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> RecordResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RecordError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> RecordResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                RecordError::Config(format!(
                    "failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}
