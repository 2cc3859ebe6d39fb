//! Solves every built-in challenge and checks the split against the
//! expected first balanced split in search order.

use par_odin::catalog::TokenType::{self, *};
use par_odin::challenges::{challenge, CHALLENGES};
use par_odin::resolve::total_value;
use par_odin::solve;

/// (challenge number, army A, army B)
const EXPECTED: &[(usize, &[TokenType], &[TokenType])] = &[
    (1, &[Hero, Hero, Soldier], &[Hero, Captain, Soldier, Soldier]),
    (2, &[Captain, Captain, Captain], &[Hero, Hero, Captain, Traitor]),
    (3, &[Hero, Captain, Captain], &[Hero, Hero, Captain, Cursed]),
    (4, &[Hero, Hero, Soldier, Traitor], &[Hero, Hero, Cursed]),
    (5, &[Soldier, Soldier, Soldier, Soldier], &[Soldier, Soldier, Mage]),
    (6, &[Hero, Hero, Soldier], &[Captain, Soldier, Soldier, Mage]),
    (7, &[Hero, Captain, Soldier], &[Hero, Soldier, Cursed, Mage]),
    (8, &[Captain, Captain, Captain, Cursed, Cursed], &[Hero, Mage]),
    (9, &[Hero, Captain, Soldier], &[Hero, Captain, Mage, Traitor]),
    (10, &[Hero, Hero, Traitor, Traitor, Traitor], &[Captain, Mage]),
    (11, &[Hero, Captain, Captain, Cursed, Traitor], &[Hero, Mage]),
    (12, &[Hero, Soldier, Soldier], &[Hero, Mage, Mage, Traitor]),
    (13, &[Soldier, Cursed, Mage], &[Cursed, Mage, Mage, Mage]),
    (14, &[Captain, Captain, Mage], &[Hero, Cursed, Mage, Mage]),
    (15, &[Hero, Soldier, Mage], &[Mage, Mage, Traitor, Traitor]),
    (16, &[Hero, Hero, Hero], &[Captain, Soldier, Soldier, Mage, Wolf]),
    (17, &[Captain, Captain, Captain, Soldier], &[Hero, Mage, Traitor, Wolf]),
    (18, &[Hero, Mage, Mage, Traitor], &[Soldier, Soldier, Soldier, Wolf]),
    (19, &[Hero], &[Soldier, Soldier, Cursed, Cursed, Cursed, Mage, Snake]),
    (20, &[Hero, Mage, Traitor], &[Cursed, Mage, Mage, Traitor, Snake]),
    (21, &[Hero, Hero, Cursed, Traitor], &[Captain, Mage, Mage, Snake]),
    (22, &[Hero, Captain, Captain, Soldier], &[Captain, Soldier, Mage, Horse]),
    (23, &[Hero, Captain, Captain, Soldier, Traitor], &[Hero, Mage, Horse]),
    (24, &[Captain, Mage, Mage, Traitor], &[Hero, Cursed, Mage, Horse]),
    (25, &[Cursed, Cursed, Cursed, Mage], &[Soldier, Soldier, Soldier, Dragon]),
    (26, &[Hero, Hero, Traitor], &[Hero, Hero, Cursed, Mage, Dragon]),
    (27, &[Hero, Soldier], &[Hero, Captain, Mage, Mage, Traitor, Dragon]),
    (28, &[Captain, Captain, Cursed, Boar], &[Captain, Soldier, Cursed, Mage, Boar]),
    (29, &[Hero, Hero, Traitor, Boar], &[Cursed, Cursed, Mage, Mage, Boar]),
    (30, &[Hero, Cursed, Traitor, Traitor, Boar], &[Mage, Mage, Mage, Boar]),
    (31, &[Hero, Hero, Captain, Cursed, Cursed, Eagle], &[Soldier, Mage, Eagle]),
    (32, &[Hero, Captain, Eagle], &[Hero, Soldier, Soldier, Mage, Traitor, Eagle]),
    (33, &[Hero, Hero, Soldier, Traitor, Eagle], &[Hero, Mage, Mage, Eagle]),
    (34, &[Hero, Hero, Mage, Traitor, Boar], &[Soldier, Soldier, Mage, Horse, Boar]),
    (35, &[Soldier, Soldier, Cursed, Cursed], &[Cursed, Mage, Mage, Wolf, Dragon]),
    (36, &[Soldier, Soldier, Mage, Mage, Mage, Eagle], &[Hero, Traitor, Horse, Eagle]),
    (37, &[Mage, Traitor, Traitor, Boar], &[Hero, Soldier, Soldier, Mage, Dragon, Boar]),
    (38, &[Hero, Hero, Eagle], &[Soldier, Mage, Traitor, Traitor, Traitor, Snake, Eagle]),
    (39, &[Hero, Captain, Mage, Wolf], &[Captain, Mage, Mage, Traitor, Horse]),
    (40, &[Soldier], &[Hero, Soldier, Soldier, Cursed, Cursed, Mage, Snake, Dragon]),
    (41, &[Hero, Hero, Soldier, Traitor, Eagle], &[Soldier, Mage, Mage, Wolf, Eagle]),
    (42, &[Hero, Cursed, Mage, Traitor, Boar], &[Hero, Hero, Traitor, Dragon, Boar]),
    (43, &[Hero, Hero, Cursed, Traitor, Boar], &[Cursed, Mage, Mage, Wolf, Boar]),
    (44, &[Captain, Soldier, Soldier, Soldier], &[Soldier, Soldier, Mage, Wolf, Snake]),
    (45, &[Captain, Soldier, Mage, Mage, Eagle], &[Soldier, Soldier, Mage, Horse, Eagle]),
    (46, &[Hero, Hero, Captain], &[Soldier, Cursed, Mage, Traitor, Wolf, Wolf]),
    (47, &[Hero, Soldier, Soldier, Traitor, Boar], &[Mage, Traitor, Traitor, Snake, Boar]),
    (48, &[Cursed, Mage, Eagle], &[Hero, Hero, Traitor, Traitor, Traitor, Wolf, Eagle]),
    (49, &[Hero, Captain, Mage], &[Hero, Captain, Captain, Traitor, Wolf, Snake]),
    (50, &[Hero, Captain, Mage], &[Hero, Mage, Mage, Traitor, Snake, Horse]),
];

/// Counts each token type; shared types in the draft are counted twice.
fn expected_counts(draft: &[TokenType]) -> [usize; 12] {
    let mut counts = [0usize; 12];
    for t in draft {
        counts[*t as usize] += 1;
    }
    for shared in [Boar, Eagle] {
        if counts[shared as usize] > 0 {
            counts[shared as usize] = 2;
        }
    }
    counts
}

fn counts(a: &[TokenType], b: &[TokenType]) -> [usize; 12] {
    let mut counts = [0usize; 12];
    for t in a.iter().chain(b) {
        counts[*t as usize] += 1;
    }
    counts
}

#[test]
fn every_challenge_matches_expected_split() {
    assert_eq!(EXPECTED.len(), CHALLENGES.len());
    for (number, a, b) in EXPECTED {
        let draft = challenge(*number).unwrap();
        let (got_a, got_b) = solve(draft).unwrap();
        assert_eq!(got_a, a.to_vec(), "challenge #{} army A", number);
        assert_eq!(got_b, b.to_vec(), "challenge #{} army B", number);
    }
}

#[test]
fn every_challenge_is_balanced_and_complete() {
    for (i, draft) in CHALLENGES.iter().enumerate() {
        let (a, b) = solve(draft).unwrap();
        assert_eq!(total_value(&a), total_value(&b), "challenge #{}", i + 1);
        assert_eq!(counts(&a, &b), expected_counts(draft), "challenge #{}", i + 1);

        let shared_present = [Boar, Eagle].iter().filter(|s| draft.contains(s)).count();
        assert_eq!(a.len() + b.len(), draft.len() + shared_present);
        for shared in [Boar, Eagle] {
            if draft.contains(&shared) {
                assert!(a.contains(&shared) && b.contains(&shared), "challenge #{}", i + 1);
            }
        }
    }
}

#[test]
fn armies_come_back_canonically_sorted() {
    for draft in CHALLENGES {
        let (a, b) = solve(draft).unwrap();
        assert!(a.windows(2).all(|w| w[0] <= w[1]));
        assert!(b.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn draft_order_does_not_change_balance() {
    let mut draft = challenge(34).unwrap().to_vec();
    draft.reverse();
    let (a, b) = solve(&draft).unwrap();
    assert_eq!(total_value(&a), total_value(&b));
    assert!(a.contains(&Boar) && b.contains(&Boar));
}
