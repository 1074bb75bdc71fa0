// SPDX-License-Identifier: MIT

//! ballot-core: record store for a single-node election ledger
//!
//! This crate provides:
//! - Fixed-layout voter and vote records with a one-byte integrity checksum
//! - An in-memory [`RecordStore`] enforcing unique voter ids and
//!   one-vote-per-voter
//! - Binary file persistence with checksum verification on load
//!
//! Single-threaded and single-process by design: there is no locking of any
//! kind, in memory or on disk. Two processes pointed at the same data
//! directory will clobber each other's writes.

pub mod limits;
pub mod record;
pub mod storage;
pub mod store;

pub use limits::StoreLimits;
pub use record::{Vote, Voter, MAX_NAME_LEN, NUM_CANDIDATES};
pub use storage::{IntegrityWarning, Ledger, StorageError};
pub use store::{RecordStore, StoreError, Tally};
