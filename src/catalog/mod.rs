//! Token catalog.
//!
//! The fixed set of token types, their colors, and the value rule attached
//! to each one. The catalog is read-only for the lifetime of the process.

pub mod rules;
pub mod token;

pub use rules::{entry, CatalogEntry, ValueFn, CATALOG};
pub use token::{Color, TokenType, ALL_TOKENS, SHARED_TOKENS, TOKEN_COUNT};
