// SPDX-License-Identifier: MIT

//! In-memory record store with uniqueness and voting-eligibility rules
//!
//! The store owns both record collections for the process lifetime. Both
//! are append-only and insertion-ordered: no reordering, no compaction,
//! no removal. Every failing operation leaves the store unchanged.

use crate::limits::StoreLimits;
use crate::record::{Vote, Voter, MAX_NAME_LEN, NUM_CANDIDATES};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur in store operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("maximum number of records reached")]
    CapacityExceeded,
    #[error("voter ID already exists: {id}")]
    DuplicateId { id: i32 },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("voter ID not found: {id}")]
    UnknownVoter { id: i32 },
    #[error("voter {id} has already voted")]
    AlreadyVoted { id: i32 },
    #[error("invalid candidate number: {candidate}")]
    InvalidCandidate { candidate: i32 },
}

/// Per-candidate vote counts plus the total number of recorded votes.
///
/// `total` is the size of the vote collection, not the sum of the counts;
/// the two differ if out-of-range votes were loaded from a damaged file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Vote count per candidate number, zero-initialized for every slot
    pub counts: BTreeMap<i32, u32>,
    /// Total recorded votes, valid or not
    pub total: usize,
}

impl Tally {
    /// Count for a candidate number, zero if out of range.
    pub fn count_for(&self, candidate: i32) -> u32 {
        self.counts.get(&candidate).copied().unwrap_or(0)
    }
}

/// Voter and vote collections with invariant enforcement.
#[derive(Debug, Default)]
pub struct RecordStore {
    voters: Vec<Voter>,
    votes: Vec<Vote>,
    limits: StoreLimits,
}

impl RecordStore {
    /// Create an empty store with the given capacity policy.
    pub fn new(limits: StoreLimits) -> Self {
        Self {
            voters: Vec::new(),
            votes: Vec::new(),
            limits,
        }
    }

    /// Rebuild a store from previously persisted collections.
    ///
    /// No validation is applied: records from disk are taken as-is, even
    /// when they would fail the cast-time checks.
    pub fn from_parts(voters: Vec<Voter>, votes: Vec<Vote>, limits: StoreLimits) -> Self {
        Self {
            voters,
            votes,
            limits,
        }
    }

    /// Register a new voter and return a reference to the stored record.
    ///
    /// Checks run in a fixed order so a given bad input always produces
    /// the same error: capacity, duplicate id, then name. Empty names are
    /// rejected; names longer than [`MAX_NAME_LEN`] bytes are truncated to
    /// the nearest character boundary, matching the on-disk buffer.
    pub fn register_voter(&mut self, id: i32, name: &str) -> Result<&Voter, StoreError> {
        if self.voters.len() >= self.limits.max_voters {
            return Err(StoreError::CapacityExceeded);
        }
        if self.find_voter(id).is_some() {
            return Err(StoreError::DuplicateId { id });
        }
        if name.is_empty() {
            return Err(StoreError::InvalidInput("name must not be empty".into()));
        }

        self.voters.push(Voter {
            id,
            name: truncate_name(name),
        });
        Ok(&self.voters[self.voters.len() - 1])
    }

    /// Linear lookup by id. At most one match by the uniqueness invariant.
    pub fn find_voter(&self, id: i32) -> Option<&Voter> {
        self.voters.iter().find(|v| v.id == id)
    }

    /// Whether any recorded vote belongs to this voter.
    pub fn has_voted(&self, voter_id: i32) -> bool {
        self.votes.iter().any(|v| v.voter_id == voter_id)
    }

    /// Record a vote.
    ///
    /// Check order is fixed: the voter must exist, must not have voted,
    /// the candidate must be in `1..=NUM_CANDIDATES`, and the vote
    /// collection must have room.
    pub fn cast_vote(&mut self, voter_id: i32, candidate: i32) -> Result<(), StoreError> {
        if self.find_voter(voter_id).is_none() {
            return Err(StoreError::UnknownVoter { id: voter_id });
        }
        if self.has_voted(voter_id) {
            return Err(StoreError::AlreadyVoted { id: voter_id });
        }
        if !(1..=NUM_CANDIDATES).contains(&candidate) {
            return Err(StoreError::InvalidCandidate { candidate });
        }
        if self.votes.len() >= self.limits.max_votes {
            return Err(StoreError::CapacityExceeded);
        }

        self.votes.push(Vote {
            voter_id,
            candidate,
        });
        Ok(())
    }

    /// Count votes per candidate.
    ///
    /// Out-of-range candidate numbers (possible only via a damaged file)
    /// are skipped but still show up in the total.
    pub fn tally(&self) -> Tally {
        let mut counts: BTreeMap<i32, u32> = (1..=NUM_CANDIDATES).map(|c| (c, 0)).collect();
        for vote in &self.votes {
            if let Some(count) = counts.get_mut(&vote.candidate) {
                *count += 1;
            }
        }
        Tally {
            counts,
            total: self.votes.len(),
        }
    }

    /// All registered voters in insertion order.
    pub fn voters(&self) -> &[Voter] {
        &self.voters
    }

    /// All recorded votes in insertion order.
    pub fn votes(&self) -> &[Vote] {
        &self.votes
    }
}

fn truncate_name(name: &str) -> String {
    if name.len() <= MAX_NAME_LEN {
        return name.to_string();
    }
    let mut end = MAX_NAME_LEN;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    name[..end].to_string()
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
