//! Par Odin! solver library.
//!
//! Splits a draft of tokens into two armies of equal total value. Exposes
//! the token catalog, the value resolver, the partition search, and the
//! draft/report layers used by the binary and integration tests.

pub mod batch;
pub mod catalog;
pub mod challenges;
pub mod draft;
pub mod permute;
pub mod report;
pub mod resolve;
pub mod search;

pub use catalog::{Color, TokenType};
pub use resolve::{resolve_value, total_value};
pub use search::{solve, SolveError};
