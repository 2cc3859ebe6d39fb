//! The built-in challenge drafts.
//!
//! Fifty fixed drafts of seven to nine tokens, numbered from 1. Every one of
//! them has a balanced split.

use crate::catalog::TokenType::{self, *};

/// Number of built-in challenges.
pub const CHALLENGE_COUNT: usize = 50;

/// All built-in challenges, in order.
pub const CHALLENGES: [&[TokenType]; CHALLENGE_COUNT] = [
    &[Hero, Hero, Hero, Captain, Soldier, Soldier, Soldier],
    &[Hero, Hero, Captain, Captain, Captain, Captain, Traitor],
    &[Hero, Hero, Hero, Captain, Captain, Captain, Cursed],
    &[Hero, Hero, Hero, Hero, Soldier, Traitor, Cursed],
    &[Soldier, Soldier, Soldier, Soldier, Soldier, Soldier, Mage],
    &[Hero, Hero, Captain, Soldier, Soldier, Soldier, Mage],
    &[Hero, Hero, Captain, Soldier, Soldier, Cursed, Mage],
    &[Hero, Captain, Captain, Captain, Cursed, Cursed, Mage],
    &[Hero, Hero, Captain, Captain, Soldier, Traitor, Mage],
    &[Hero, Hero, Captain, Traitor, Traitor, Traitor, Mage],
    &[Hero, Hero, Captain, Captain, Traitor, Cursed, Mage],
    &[Hero, Hero, Soldier, Soldier, Traitor, Mage, Mage],
    &[Soldier, Cursed, Cursed, Mage, Mage, Mage, Mage],
    &[Hero, Captain, Captain, Cursed, Mage, Mage, Mage],
    &[Hero, Soldier, Traitor, Traitor, Mage, Mage, Mage],
    &[Hero, Hero, Hero, Captain, Soldier, Soldier, Mage, Wolf],
    &[Hero, Captain, Captain, Captain, Soldier, Traitor, Mage, Wolf],
    &[Hero, Soldier, Soldier, Soldier, Traitor, Mage, Mage, Wolf],
    &[Hero, Soldier, Soldier, Cursed, Cursed, Cursed, Mage, Snake],
    &[Hero, Traitor, Traitor, Cursed, Mage, Mage, Mage, Snake],
    &[Hero, Hero, Captain, Traitor, Cursed, Mage, Mage, Snake],
    &[Hero, Captain, Captain, Captain, Soldier, Soldier, Mage, Horse],
    &[Hero, Hero, Captain, Captain, Soldier, Traitor, Mage, Horse],
    &[Hero, Captain, Traitor, Cursed, Mage, Mage, Mage, Horse],
    &[Soldier, Soldier, Soldier, Cursed, Cursed, Cursed, Mage, Dragon],
    &[Hero, Hero, Hero, Hero, Traitor, Cursed, Mage, Dragon],
    &[Hero, Hero, Captain, Soldier, Traitor, Mage, Mage, Dragon],
    &[Captain, Captain, Captain, Soldier, Cursed, Cursed, Mage, Boar],
    &[Hero, Hero, Traitor, Cursed, Cursed, Mage, Mage, Boar],
    &[Hero, Traitor, Traitor, Cursed, Mage, Mage, Mage, Boar],
    &[Hero, Hero, Captain, Soldier, Cursed, Cursed, Mage, Eagle],
    &[Hero, Hero, Captain, Soldier, Soldier, Traitor, Mage, Eagle],
    &[Hero, Hero, Hero, Soldier, Traitor, Mage, Mage, Eagle],
    &[Hero, Hero, Soldier, Soldier, Traitor, Mage, Mage, Horse, Boar],
    &[Soldier, Soldier, Cursed, Cursed, Cursed, Mage, Mage, Wolf, Dragon],
    &[Hero, Soldier, Soldier, Traitor, Mage, Mage, Mage, Horse, Eagle],
    &[Hero, Soldier, Soldier, Traitor, Traitor, Mage, Mage, Dragon, Boar],
    &[Hero, Hero, Soldier, Traitor, Traitor, Traitor, Mage, Snake, Eagle],
    &[Hero, Captain, Captain, Traitor, Mage, Mage, Mage, Wolf, Horse],
    &[Hero, Soldier, Soldier, Soldier, Cursed, Cursed, Mage, Snake, Dragon],
    &[Hero, Hero, Soldier, Soldier, Traitor, Mage, Mage, Wolf, Eagle],
    &[Hero, Hero, Hero, Traitor, Traitor, Cursed, Mage, Dragon, Boar],
    &[Hero, Hero, Traitor, Cursed, Cursed, Mage, Mage, Wolf, Boar],
    &[Soldier, Soldier, Soldier, Soldier, Soldier, Captain, Mage, Wolf, Snake],
    &[Captain, Soldier, Soldier, Soldier, Mage, Mage, Mage, Horse, Eagle],
    &[Hero, Hero, Captain, Soldier, Traitor, Cursed, Mage, Wolf, Wolf],
    &[Hero, Soldier, Soldier, Traitor, Traitor, Traitor, Mage, Snake, Boar],
    &[Hero, Hero, Traitor, Traitor, Traitor, Cursed, Mage, Wolf, Eagle],
    &[Hero, Hero, Captain, Captain, Captain, Traitor, Mage, Wolf, Snake],
    &[Hero, Hero, Captain, Traitor, Mage, Mage, Mage, Snake, Horse],
];

/// Returns challenge `number` (1-based), or None if out of range.
pub fn challenge(number: usize) -> Option<&'static [TokenType]> {
    number.checked_sub(1).and_then(|i| CHALLENGES.get(i)).copied()
}
