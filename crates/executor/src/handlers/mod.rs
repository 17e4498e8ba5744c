//! Command handlers organized by concern.
//!
//! | Module | Commands |
//! |--------|----------|
//! | `ledger` | Init |
//! | `kv` | Write, Read, Exists |
//! | `user` | CreateUser, Delete, ListUsers, AuditIndex |

pub mod kv;
pub mod ledger;
pub mod user;
