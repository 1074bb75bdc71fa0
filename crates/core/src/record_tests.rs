// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn checksum_is_byte_sum_mod_256() {
    assert_eq!(checksum(&[]), 0);
    assert_eq!(checksum(&[1, 2, 3]), 6);
    assert_eq!(checksum(&[255, 1]), 0);
    assert_eq!(checksum(&[200, 100]), 44); // 300 % 256
}

#[test]
fn voter_encode_layout() {
    let voter = Voter {
        id: 7,
        name: "Alice".to_string(),
    };
    let buf = voter.encode();

    assert_eq!(&buf[..4], &7i32.to_le_bytes());
    assert_eq!(&buf[4..9], b"Alice");
    assert!(buf[9..4 + MAX_NAME_LEN].iter().all(|b| *b == 0));
    assert_eq!(
        buf[VOTER_RECORD_LEN - 1],
        checksum(&buf[..VOTER_RECORD_LEN - 1])
    );
}

#[test]
fn voter_roundtrip() {
    let voter = Voter {
        id: -3,
        name: "Bob".to_string(),
    };
    let (decoded, valid) = Voter::decode(&voter.encode());
    assert!(valid);
    assert_eq!(decoded, voter);
}

#[test]
fn voter_name_cut_at_buffer_boundary() {
    let voter = Voter {
        id: 1,
        name: "x".repeat(80),
    };
    let (decoded, valid) = Voter::decode(&voter.encode());
    assert!(valid);
    assert_eq!(decoded.name.len(), MAX_NAME_LEN);
}

#[test]
fn vote_roundtrip() {
    let vote = Vote {
        voter_id: 42,
        candidate: 2,
    };
    let (decoded, valid) = Vote::decode(&vote.encode());
    assert!(valid);
    assert_eq!(decoded, vote);
}

#[test]
fn any_vote_payload_byte_flip_is_detected() {
    let vote = Vote {
        voter_id: 42,
        candidate: 2,
    };
    for i in 0..VOTE_RECORD_LEN - 1 {
        let mut buf = vote.encode();
        buf[i] ^= 0x01;
        let (_, valid) = Vote::decode(&buf);
        assert!(!valid, "flip at byte {} went undetected", i);
    }
}

#[test]
fn any_voter_payload_byte_flip_is_detected() {
    let voter = Voter {
        id: 9,
        name: "Mallory".to_string(),
    };
    for i in 0..VOTER_RECORD_LEN - 1 {
        let mut buf = voter.encode();
        buf[i] ^= 0x01;
        let (_, valid) = Voter::decode(&buf);
        assert!(!valid, "flip at byte {} went undetected", i);
    }
}
