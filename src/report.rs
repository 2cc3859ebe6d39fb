//! Presentation of drafts and solutions.
//!
//! Text formatting for the terminal and serde-backed JSON records, one per
//! line, for machine consumers. Values shown are always resolved against
//! the canonically ordered army, the same order the search scores.

use std::io::Write;

use serde::Serialize;

use crate::catalog::{Color, TokenType};
use crate::resolve::{canonicalized, resolve_army};
use crate::search::SolveError;

/// A single token with its resolved value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenReport {
    pub token: TokenType,
    pub color: Color,
    pub value: i32,
}

/// One army, its resolved tokens and total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArmyReport {
    pub tokens: Vec<TokenReport>,
    pub total: i32,
}

impl ArmyReport {
    /// Resolves `army` (after canonical sorting) into a report.
    pub fn new(army: &[TokenType]) -> Self {
        let army = canonicalized(army);
        let tokens: Vec<TokenReport> = army
            .iter()
            .zip(resolve_army(&army))
            .map(|(t, value)| TokenReport {
                token: *t,
                color: t.color(),
                value,
            })
            .collect();
        let total = tokens.iter().map(|t| t.value).sum();
        ArmyReport { tokens, total }
    }
}

/// The outcome of solving one draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionReport {
    pub draft: Vec<TokenType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub armies: Option<[ArmyReport; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SolutionReport {
    /// Builds a report from a draft and the result of solving it.
    pub fn new(
        draft: &[TokenType],
        result: &Result<(Vec<TokenType>, Vec<TokenType>), SolveError>,
    ) -> Self {
        match result {
            Ok((a, b)) => SolutionReport {
                draft: draft.to_vec(),
                armies: Some([ArmyReport::new(a), ArmyReport::new(b)]),
                error: None,
            },
            Err(e) => SolutionReport {
                draft: draft.to_vec(),
                armies: None,
                error: Some(e.to_string()),
            },
        }
    }

    /// Returns true when the draft was split.
    pub fn is_solved(&self) -> bool {
        self.armies.is_some()
    }
}

/// Formats tokens as a comma-separated list of names, in the given order.
pub fn format_tokens(tokens: &[TokenType]) -> String {
    tokens
        .iter()
        .map(|t| t.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats an army as `HERO (3) + SOLDIER (1)`, in canonical order.
pub fn format_army(army: &[TokenType]) -> String {
    ArmyReport::new(army)
        .tokens
        .iter()
        .map(|t| format!("{} ({})", t.token, t.value))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Formats a solved split as `<army A> === <army B>`.
pub fn format_solution(a: &[TokenType], b: &[TokenType], with_values: bool) -> String {
    if with_values {
        format!("{} === {}", format_army(a), format_army(b))
    } else {
        format!(
            "{} === {}",
            format_tokens(&canonicalized(a)),
            format_tokens(&canonicalized(b))
        )
    }
}

/// Writes reports as JSONL (one JSON object per line).
pub fn write_jsonl<W: Write>(reports: &[SolutionReport], out: &mut W) -> std::io::Result<()> {
    for report in reports {
        serde_json::to_writer(&mut *out, report)?;
        writeln!(out)?;
    }
    out.flush()
}
