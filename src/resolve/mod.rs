//! Army resolution.
//!
//! Computes each token's value against the army it sits in, and the army
//! totals the search compares.

pub mod army;

pub use army::{canonical_sort, canonicalized, resolve_army, resolve_value, total_value};
