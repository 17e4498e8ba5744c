//! State store backends
//!
//! This crate implements the `StateStore` contract with:
//! - MemoryStore: BTreeMap-based store behind a `parking_lot::RwLock`,
//!   with a global monotonically increasing version counter
//! - FaultyStore: wrapper that injects `Unavailable` failures on chosen
//!   operations, used to exercise partial-write and error paths

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod faulty;
pub mod memory;

pub use faulty::{FaultyStore, Op};
pub use memory::MemoryStore;
