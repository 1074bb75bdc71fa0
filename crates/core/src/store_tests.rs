// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn register_then_find() {
    let mut store = RecordStore::default();
    store.register_voter(1, "Alice").unwrap();

    let voter = store.find_voter(1).unwrap();
    assert_eq!(voter.id, 1);
    assert_eq!(voter.name, "Alice");
    assert!(store.find_voter(2).is_none());
}

#[test]
fn register_duplicate_id_rejected() {
    let mut store = RecordStore::default();
    store.register_voter(1, "Alice").unwrap();

    let err = store.register_voter(1, "Carol").unwrap_err();
    assert_eq!(err, StoreError::DuplicateId { id: 1 });
    assert_eq!(store.voters().len(), 1);
    assert_eq!(store.find_voter(1).unwrap().name, "Alice");
}

#[test]
fn register_empty_name_rejected() {
    let mut store = RecordStore::default();
    let err = store.register_voter(1, "").unwrap_err();
    assert!(matches!(err, StoreError::InvalidInput(_)));
    assert!(store.voters().is_empty());
}

#[test]
fn register_long_name_truncated() {
    let mut store = RecordStore::default();
    let voter = store.register_voter(1, &"x".repeat(60)).unwrap();
    assert_eq!(voter.name.len(), MAX_NAME_LEN);
}

#[test]
fn register_at_capacity_fails() {
    let mut store = RecordStore::new(StoreLimits::for_testing());
    for id in 0..3 {
        store.register_voter(id, "Voter").unwrap();
    }

    let err = store.register_voter(99, "Late").unwrap_err();
    assert_eq!(err, StoreError::CapacityExceeded);
    assert_eq!(store.voters().len(), 3);
}

#[test]
fn cast_vote_unknown_voter() {
    let mut store = RecordStore::default();
    let err = store.cast_vote(5, 1).unwrap_err();
    assert_eq!(err, StoreError::UnknownVoter { id: 5 });
    assert!(store.votes().is_empty());
}

#[test]
fn cast_vote_twice_rejected() {
    let mut store = RecordStore::default();
    store.register_voter(1, "Alice").unwrap();
    store.cast_vote(1, 1).unwrap();

    let err = store.cast_vote(1, 2).unwrap_err();
    assert_eq!(err, StoreError::AlreadyVoted { id: 1 });
    assert_eq!(store.votes().len(), 1);
}

#[test]
fn cast_vote_candidate_out_of_range() {
    let mut store = RecordStore::default();
    store.register_voter(1, "Alice").unwrap();

    let err = store.cast_vote(1, 0).unwrap_err();
    assert_eq!(err, StoreError::InvalidCandidate { candidate: 0 });

    let err = store.cast_vote(1, NUM_CANDIDATES + 1).unwrap_err();
    assert_eq!(
        err,
        StoreError::InvalidCandidate {
            candidate: NUM_CANDIDATES + 1
        }
    );
    assert!(store.votes().is_empty());
}

#[test]
fn unknown_voter_check_precedes_candidate_range() {
    let mut store = RecordStore::default();
    let err = store.cast_vote(9, 0).unwrap_err();
    assert_eq!(err, StoreError::UnknownVoter { id: 9 });
}

#[test]
fn prior_vote_check_precedes_candidate_range() {
    let mut store = RecordStore::default();
    store.register_voter(1, "Alice").unwrap();
    store.cast_vote(1, 1).unwrap();

    let err = store.cast_vote(1, 99).unwrap_err();
    assert_eq!(err, StoreError::AlreadyVoted { id: 1 });
}

#[test]
fn vote_capacity_checked_last() {
    let limits = StoreLimits {
        max_voters: 4,
        max_votes: 1,
    };
    let mut store = RecordStore::new(limits);
    store.register_voter(1, "Alice").unwrap();
    store.register_voter(2, "Bob").unwrap();
    store.cast_vote(1, 1).unwrap();

    let err = store.cast_vote(2, 1).unwrap_err();
    assert_eq!(err, StoreError::CapacityExceeded);
    assert_eq!(store.votes().len(), 1);
}

#[test]
fn tally_scenario() {
    let mut store = RecordStore::default();
    store.register_voter(1, "Alice").unwrap();
    store.register_voter(2, "Bob").unwrap();
    store.cast_vote(1, 1).unwrap();
    store.cast_vote(2, 2).unwrap();

    let tally = store.tally();
    assert_eq!(tally.count_for(1), 1);
    assert_eq!(tally.count_for(2), 1);
    assert_eq!(tally.count_for(3), 0);
    assert_eq!(tally.total, 2);
}

#[test]
fn tally_skips_out_of_range_votes_but_counts_total() {
    // An out-of-range vote can only arrive through a damaged file.
    let store = RecordStore::from_parts(
        vec![Voter {
            id: 1,
            name: "Alice".into(),
        }],
        vec![Vote {
            voter_id: 1,
            candidate: 9,
        }],
        StoreLimits::default(),
    );

    let tally = store.tally();
    assert_eq!(tally.counts.values().sum::<u32>(), 0);
    assert_eq!(tally.total, 1);
}

#[test]
fn tally_initializes_all_candidate_slots() {
    let store = RecordStore::default();
    let tally = store.tally();
    assert_eq!(tally.counts.len(), NUM_CANDIDATES as usize);
    assert!(tally.counts.values().all(|c| *c == 0));
    assert_eq!(tally.total, 0);
}
