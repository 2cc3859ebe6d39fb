//! Value rules for every token type.
//!
//! Each rule is a free function of the whole army and the position of the
//! token being evaluated. Rules read nothing else, so resolving the same
//! army twice always gives the same values. `CATALOG` is indexed by the
//! `TokenType` discriminant.

use super::token::{Color, TokenType, TOKEN_COUNT};

/// Computes a token's value from its army and its index in that army.
pub type ValueFn = fn(&[TokenType], usize) -> i32;

/// The catalog entry for a single token type.
#[derive(Clone, Copy)]
pub struct CatalogEntry {
    pub color: Color,
    pub value: ValueFn,
}

/// Rules table in canonical order.
pub static CATALOG: [CatalogEntry; TOKEN_COUNT] = [
    CatalogEntry { color: Color::White, value: hero },
    CatalogEntry { color: Color::White, value: captain },
    CatalogEntry { color: Color::White, value: soldier },
    CatalogEntry { color: Color::White, value: cursed },
    CatalogEntry { color: Color::White, value: mage },
    CatalogEntry { color: Color::White, value: traitor },
    CatalogEntry { color: Color::Black, value: wolf },
    CatalogEntry { color: Color::Black, value: snake },
    CatalogEntry { color: Color::Black, value: horse },
    CatalogEntry { color: Color::Black, value: dragon },
    CatalogEntry { color: Color::Black, value: boar },
    CatalogEntry { color: Color::Black, value: eagle },
];

/// Returns the catalog entry for a token type.
#[inline]
pub fn entry(token: TokenType) -> &'static CatalogEntry {
    &CATALOG[token as usize]
}

/// Number of WHITE tokens in the army.
fn white_count(army: &[TokenType]) -> i32 {
    army.iter().filter(|t| t.is_white()).count() as i32
}

/// Smallest strictly positive resolved value among the army's WHITE tokens,
/// or 0 when there is none. Each WHITE token is resolved at its own index.
fn lowest_positive_white(army: &[TokenType]) -> i32 {
    army.iter()
        .enumerate()
        .filter(|(_, t)| t.is_white())
        .map(|(i, t)| (entry(*t).value)(army, i))
        .filter(|v| *v > 0)
        .min()
        .unwrap_or(0)
}

/// Sum of occurrence counts over WHITE types present at least twice.
fn duplicated_whites(army: &[TokenType]) -> i32 {
    let mut counts = [0i32; TOKEN_COUNT];
    for t in army.iter().filter(|t| t.is_white()) {
        counts[*t as usize] += 1;
    }
    counts.iter().filter(|c| **c >= 2).sum()
}

fn hero(_: &[TokenType], _: usize) -> i32 {
    3
}

fn captain(_: &[TokenType], _: usize) -> i32 {
    2
}

fn soldier(_: &[TokenType], _: usize) -> i32 {
    1
}

fn cursed(_: &[TokenType], _: usize) -> i32 {
    -1
}

fn mage(army: &[TokenType], _: usize) -> i32 {
    army.iter()
        .filter(|t| t.is_white() && **t != TokenType::Mage)
        .count() as i32
}

/// +1, or -2 when paired with a Hero. Traitors pair in army order, one per
/// Hero, so with fewer Heroes than Traitors the last Traitors stay unpaired.
fn traitor(army: &[TokenType], index: usize) -> i32 {
    let heroes = army.iter().filter(|t| **t == TokenType::Hero).count();
    let traitors = army.iter().filter(|t| **t == TokenType::Traitor).count();
    let rank = army[..index]
        .iter()
        .filter(|t| **t == TokenType::Traitor)
        .count();
    let paired = army[index] == TokenType::Traitor && rank < heroes.min(traitors);
    if paired {
        1 - 3
    } else {
        1
    }
}

fn wolf(army: &[TokenType], _: usize) -> i32 {
    lowest_positive_white(army) * 2
}

fn snake(army: &[TokenType], _: usize) -> i32 {
    -lowest_positive_white(army)
}

fn horse(army: &[TokenType], _: usize) -> i32 {
    white_count(army)
}

fn dragon(army: &[TokenType], _: usize) -> i32 {
    -white_count(army)
}

fn boar(army: &[TokenType], _: usize) -> i32 {
    duplicated_whites(army)
}

fn eagle(army: &[TokenType], _: usize) -> i32 {
    -duplicated_whites(army)
}
