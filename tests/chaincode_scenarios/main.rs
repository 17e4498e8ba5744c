//! Chaincode Scenario Test Suite
//!
//! End-to-end behavior through the host entry points, across all crates.
//!
//! ## Modules
//!
//! - `scenarios`: the documented init/create/read/delete walkthroughs
//! - `faults`: store failures and the partial writes they leave behind
//! - `concurrency`: racing index updates in both index write modes
//! - `config`: configuration loaded from disk
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test chaincode_scenarios
//! cargo test --test chaincode_scenarios faults::
//! cargo test --test chaincode_scenarios -- --nocapture
//! ```

mod common;

mod concurrency;
mod config;
mod faults;
mod scenarios;
