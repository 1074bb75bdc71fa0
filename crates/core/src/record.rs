// SPDX-License-Identifier: MIT

//! Fixed-layout voter and vote records with integrity checksums
//!
//! Every persisted record carries a one-byte checksum: the sum of its
//! payload bytes reduced modulo 256. This detects accidental corruption
//! (bit rot, truncated writes) and nothing more. It is not a cryptographic
//! hash and offers no tamper evidence; anyone can rewrite a record and its
//! checksum together. The algorithm is fixed by the on-disk format.
//!
//! All integer fields are little-endian. Records are packed back-to-back
//! with no separators.

use serde::Serialize;

/// Maximum stored name length in bytes.
pub const MAX_NAME_LEN: usize = 50;

/// Candidates are numbered `1..=NUM_CANDIDATES`.
pub const NUM_CANDIDATES: i32 = 3;

/// On-disk size of a voter record: id + name buffer + checksum.
pub const VOTER_RECORD_LEN: usize = 4 + MAX_NAME_LEN + 1;

/// On-disk size of a vote record: voter id + candidate + checksum.
pub const VOTE_RECORD_LEN: usize = 4 + 4 + 1;

/// Sum of all payload bytes, reduced modulo 256.
pub fn checksum(payload: &[u8]) -> u8 {
    payload.iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
}

/// A registered voter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Voter {
    pub id: i32,
    pub name: String,
}

impl Voter {
    /// Encode to the fixed on-disk layout with a freshly computed checksum.
    ///
    /// Layout: `id` (4 bytes LE), `name` (50 bytes, NUL-padded), checksum.
    /// Names longer than the buffer are cut at the buffer boundary.
    pub fn encode(&self) -> [u8; VOTER_RECORD_LEN] {
        let mut buf = [0u8; VOTER_RECORD_LEN];
        buf[..4].copy_from_slice(&self.id.to_le_bytes());
        let name = self.name.as_bytes();
        let len = name.len().min(MAX_NAME_LEN);
        buf[4..4 + len].copy_from_slice(&name[..len]);
        buf[VOTER_RECORD_LEN - 1] = checksum(&buf[..VOTER_RECORD_LEN - 1]);
        buf
    }

    /// Decode from the fixed on-disk layout.
    ///
    /// Returns the record and whether the stored checksum matched the one
    /// recomputed over the payload bytes.
    pub fn decode(buf: &[u8; VOTER_RECORD_LEN]) -> (Self, bool) {
        let id = i32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
        let name_buf = &buf[4..4 + MAX_NAME_LEN];
        let end = name_buf
            .iter()
            .position(|b| *b == 0)
            .unwrap_or(MAX_NAME_LEN);
        let name = String::from_utf8_lossy(&name_buf[..end]).into_owned();
        let valid = buf[VOTER_RECORD_LEN - 1] == checksum(&buf[..VOTER_RECORD_LEN - 1]);
        (Self { id, name }, valid)
    }
}

/// A single cast ballot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Vote {
    pub voter_id: i32,
    pub candidate: i32,
}

impl Vote {
    /// Encode to the fixed on-disk layout with a freshly computed checksum.
    pub fn encode(&self) -> [u8; VOTE_RECORD_LEN] {
        let mut buf = [0u8; VOTE_RECORD_LEN];
        buf[..4].copy_from_slice(&self.voter_id.to_le_bytes());
        buf[4..8].copy_from_slice(&self.candidate.to_le_bytes());
        buf[VOTE_RECORD_LEN - 1] = checksum(&buf[..VOTE_RECORD_LEN - 1]);
        buf
    }

    /// Decode from the fixed on-disk layout, verifying the checksum.
    pub fn decode(buf: &[u8; VOTE_RECORD_LEN]) -> (Self, bool) {
        let voter_id = i32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
        let candidate = i32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
        let valid = buf[VOTE_RECORD_LEN - 1] == checksum(&buf[..VOTE_RECORD_LEN - 1]);
        (Self { voter_id, candidate }, valid)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
