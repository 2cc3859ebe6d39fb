//! Per-token and per-army value resolution.
//!
//! Traitor pairing and Boar/Eagle counting depend on token positions, so
//! armies must be in canonical order before they are resolved. The search
//! and the report layer both go through `canonical_sort`.

use crate::catalog::{entry, TokenType};

/// Sorts an army into canonical token order in place.
pub fn canonical_sort(army: &mut [TokenType]) {
    army.sort_unstable();
}

/// Returns a canonically ordered copy of `tokens`.
pub fn canonicalized(tokens: &[TokenType]) -> Vec<TokenType> {
    let mut army = tokens.to_vec();
    canonical_sort(&mut army);
    army
}

/// Resolves the value of `token` sitting at `index` in `army`.
///
/// The rule reads the whole army.
///
/// # Panics
///
/// Panics if `index` is out of range or `army[index]` is not `token`.
#[inline]
pub fn resolve_value(token: TokenType, index: usize, army: &[TokenType]) -> i32 {
    assert_eq!(
        army.get(index),
        Some(&token),
        "token {:?} is not at index {}",
        token,
        index
    );
    (entry(token).value)(army, index)
}

/// Resolves every token of the army, in army order.
pub fn resolve_army(army: &[TokenType]) -> Vec<i32> {
    army.iter()
        .enumerate()
        .map(|(i, t)| resolve_value(*t, i, army))
        .collect()
}

/// Sum of all resolved values of the army.
pub fn total_value(army: &[TokenType]) -> i32 {
    army.iter()
        .enumerate()
        .map(|(i, t)| resolve_value(*t, i, army))
        .sum()
}
