//! Exhaustive two-way partition search.
//!
//! Boar and Eagle are pulled out of the draft first. Every permutation of
//! the remaining tokens is cut at each interior index into a prefix and a
//! suffix; each present shared token is then added to both halves, both
//! halves are put in canonical order, and their totals compared. The first
//! balanced candidate in (permutation, cut) order wins.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::catalog::{TokenType, SHARED_TOKENS};
use crate::permute::Permutations;
use crate::report::format_tokens;
use crate::resolve::{canonical_sort, total_value};

/// Errors returned by the partition search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("could not solve: {}", format_tokens(.draft))]
    Unsolvable { draft: Vec<TokenType> },

    #[error("search interrupted: {}", format_tokens(.draft))]
    Interrupted { draft: Vec<TokenType> },
}

impl SolveError {
    /// The draft the failed search was run on, in submitted order.
    pub fn draft(&self) -> &[TokenType] {
        match self {
            SolveError::Unsolvable { draft } | SolveError::Interrupted { draft } => draft,
        }
    }
}

/// A balanced split and the amount of work it took to find it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub armies: (Vec<TokenType>, Vec<TokenType>),
    pub total: i32,
    pub permutations: u64,
    pub candidates: u64,
}

/// Splits the draft into two armies of equal total value.
///
/// Both armies are returned in canonical order. Fails with
/// `SolveError::Unsolvable` when no split balances.
pub fn solve(draft: &[TokenType]) -> Result<(Vec<TokenType>, Vec<TokenType>), SolveError> {
    search(draft, None).map(|result| result.armies)
}

/// Runs the partition search, checking `stop` once per permutation.
///
/// When `stop` is raised before a balanced split is found the search
/// returns `SolveError::Interrupted`.
pub fn search(draft: &[TokenType], stop: Option<&AtomicBool>) -> Result<SearchResult, SolveError> {
    let shared: Vec<TokenType> = SHARED_TOKENS
        .iter()
        .copied()
        .filter(|s| draft.contains(s))
        .collect();
    let pool: Vec<TokenType> = draft.iter().copied().filter(|t| !t.is_shared()).collect();

    let mut permutations = 0u64;
    let mut candidates = 0u64;
    for perm in Permutations::new(pool) {
        if stop.is_some_and(|s| s.load(Ordering::Relaxed)) {
            tracing::debug!(permutations, candidates, "search interrupted");
            return Err(SolveError::Interrupted {
                draft: draft.to_vec(),
            });
        }
        permutations += 1;

        for cut in 1..perm.len() {
            candidates += 1;
            let (a, b) = split_at(&perm, cut, &shared);
            let total_a = total_value(&a);
            if total_a == total_value(&b) {
                tracing::debug!(
                    draft = %format_tokens(draft),
                    cut,
                    total = total_a,
                    permutations,
                    candidates,
                    "balanced split found"
                );
                return Ok(SearchResult {
                    armies: (a, b),
                    total: total_a,
                    permutations,
                    candidates,
                });
            }
        }
    }

    tracing::debug!(
        draft = %format_tokens(draft),
        permutations,
        candidates,
        "search space exhausted"
    );
    Err(SolveError::Unsolvable {
        draft: draft.to_vec(),
    })
}

/// Builds the two canonical armies for a cut of one permutation.
fn split_at(
    perm: &[TokenType],
    cut: usize,
    shared: &[TokenType],
) -> (Vec<TokenType>, Vec<TokenType>) {
    let (left, right) = perm.split_at(cut);
    let mut a = Vec::with_capacity(left.len() + shared.len());
    a.extend_from_slice(left);
    a.extend_from_slice(shared);
    let mut b = Vec::with_capacity(right.len() + shared.len());
    b.extend_from_slice(right);
    b.extend_from_slice(shared);
    canonical_sort(&mut a);
    canonical_sort(&mut b);
    (a, b)
}
