// SPDX-License-Identifier: MIT

//! Binary file persistence for voter and vote records
//!
//! Each file is a `u32` little-endian record count followed by that many
//! fixed-size records. Checksums are recomputed at write time, immediately
//! before the bytes hit the file, so a persisted checksum always matches
//! its persisted payload. On read every checksum is verified.
//!
//! A failed checksum does not reject the record: it is logged, reported as
//! an [`IntegrityWarning`], and the record is loaded as-is. Rejecting or
//! quarantining corrupt records would be the safer choice but changes
//! observable behavior against existing data files, so it is left to the
//! caller.
//!
//! A truncated file declares more records than it holds; reading stops
//! quietly at end of data. Saving is not atomic: a failure mid-write
//! leaves a partial file behind.

use crate::limits::StoreLimits;
use crate::record::{Vote, Voter, VOTER_RECORD_LEN, VOTE_RECORD_LEN};
use crate::store::RecordStore;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Well-known file names, resolved against the data directory.
pub const VOTERS_FILE: &str = "voters.bin";
pub const VOTES_FILE: &str = "votes.bin";

/// Errors that can occur in persistence operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A record whose stored checksum did not match its payload.
///
/// Non-fatal: the record is loaded anyway. Identified by the record's
/// natural key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityWarning {
    #[error("voter data integrity check failed for ID {id}")]
    Voter { id: i32 },
    #[error("vote data integrity check failed for voter ID {voter_id}")]
    Vote { voter_id: i32 },
}

/// Load voter records. A missing file is an empty collection, not an error.
pub fn load_voters(path: &Path) -> Result<(Vec<Voter>, Vec<IntegrityWarning>), StorageError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok((Vec::new(), Vec::new())),
        Err(e) => return Err(e.into()),
    };
    let mut reader = BufReader::new(file);
    let count = read_count(&mut reader)?;

    let mut voters = Vec::new();
    let mut warnings = Vec::new();
    let mut buf = [0u8; VOTER_RECORD_LEN];
    for _ in 0..count {
        if !read_exact_or_eof(&mut reader, &mut buf)? {
            break;
        }
        let (voter, valid) = Voter::decode(&buf);
        if !valid {
            tracing::warn!(id = voter.id, "voter record failed integrity check");
            warnings.push(IntegrityWarning::Voter { id: voter.id });
        }
        voters.push(voter);
    }
    Ok((voters, warnings))
}

/// Load vote records. A missing file is an empty collection, not an error.
pub fn load_votes(path: &Path) -> Result<(Vec<Vote>, Vec<IntegrityWarning>), StorageError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok((Vec::new(), Vec::new())),
        Err(e) => return Err(e.into()),
    };
    let mut reader = BufReader::new(file);
    let count = read_count(&mut reader)?;

    let mut votes = Vec::new();
    let mut warnings = Vec::new();
    let mut buf = [0u8; VOTE_RECORD_LEN];
    for _ in 0..count {
        if !read_exact_or_eof(&mut reader, &mut buf)? {
            break;
        }
        let (vote, valid) = Vote::decode(&buf);
        if !valid {
            tracing::warn!(voter_id = vote.voter_id, "vote record failed integrity check");
            warnings.push(IntegrityWarning::Vote {
                voter_id: vote.voter_id,
            });
        }
        votes.push(vote);
    }
    Ok((votes, warnings))
}

/// Write voter records: count field, then each record in collection order.
pub fn save_voters(path: &Path, voters: &[Voter]) -> Result<(), StorageError> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&(voters.len() as u32).to_le_bytes())?;
    for voter in voters {
        writer.write_all(&voter.encode())?;
    }
    writer.flush()?;
    Ok(())
}

/// Write vote records: count field, then each record in collection order.
pub fn save_votes(path: &Path, votes: &[Vote]) -> Result<(), StorageError> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&(votes.len() as u32).to_le_bytes())?;
    for vote in votes {
        writer.write_all(&vote.encode())?;
    }
    writer.flush()?;
    Ok(())
}

/// Read the leading count field. A file too short to hold one is treated
/// as holding zero records.
fn read_count(reader: &mut impl Read) -> Result<u32, StorageError> {
    let mut buf = [0u8; 4];
    if read_exact_or_eof(reader, &mut buf)? {
        Ok(u32::from_le_bytes(buf))
    } else {
        Ok(0)
    }
}

/// Fill `buf` completely, returning `Ok(false)` on clean or mid-record
/// end of file.
fn read_exact_or_eof(reader: &mut impl Read, buf: &mut [u8]) -> Result<bool, StorageError> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            return Ok(false);
        }
        filled += n;
    }
    Ok(true)
}

/// Both record files paired with an in-memory store.
///
/// Mirrors the load-at-start / save-at-exit lifecycle: [`Ledger::open`]
/// reads both files once, [`Ledger::save`] rewrites both once. No file
/// handles are held in between, and there is no file locking.
pub struct Ledger {
    data_dir: PathBuf,
    store: RecordStore,
    warnings: Vec<IntegrityWarning>,
}

impl Ledger {
    /// Load both record files from a data directory.
    pub fn open(data_dir: &Path, limits: StoreLimits) -> Result<Self, StorageError> {
        let (voters, mut warnings) = load_voters(&data_dir.join(VOTERS_FILE))?;
        let (votes, vote_warnings) = load_votes(&data_dir.join(VOTES_FILE))?;
        warnings.extend(vote_warnings);

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            store: RecordStore::from_parts(voters, votes, limits),
            warnings,
        })
    }

    /// Warnings collected while loading. The suspect records are in the
    /// store regardless.
    pub fn warnings(&self) -> &[IntegrityWarning] {
        &self.warnings
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    /// Rewrite both files from the current in-memory state.
    pub fn save(&self) -> Result<(), StorageError> {
        save_voters(&self.data_dir.join(VOTERS_FILE), self.store.voters())?;
        save_votes(&self.data_dir.join(VOTES_FILE), self.store.votes())?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;
