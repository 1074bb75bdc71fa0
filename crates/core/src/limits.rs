// SPDX-License-Identifier: MIT

//! Capacity policy for the record store.
//!
//! The collections grow on demand; these limits cap how far. They are
//! policy checks, not memory bounds.

/// Maximum record counts for a [`crate::RecordStore`].
#[derive(Debug, Clone)]
pub struct StoreLimits {
    /// Maximum registered voters
    pub max_voters: usize,
    /// Maximum recorded votes
    pub max_votes: usize,
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self {
            max_voters: 100,
            max_votes: 100,
        }
    }
}

impl StoreLimits {
    /// Create limits suitable for testing (lower values).
    pub fn for_testing() -> Self {
        Self {
            max_voters: 3,
            max_votes: 3,
        }
    }
}
