//! Partition search.
//!
//! Enumerates every way of cutting the draft into two armies and returns the
//! first split whose totals match.

pub mod partition;

pub use partition::{search, solve, SearchResult, SolveError};
