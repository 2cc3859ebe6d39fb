//! Draft construction.
//!
//! Turns text, JSON files, or a seeded RNG into drafts the solver accepts.
//! Unknown token names are rejected here, before anything reaches the
//! search.

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use rand::Rng;

use crate::catalog::{TokenType, ALL_TOKENS};
use crate::resolve::canonical_sort;

/// Errors that can occur while building a draft.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("unknown token type: '{0}'")]
    UnknownToken(String),

    #[error("draft is empty")]
    Empty,

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse drafts JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses a draft from token names separated by commas and/or whitespace.
///
/// Names are matched case-insensitively (`hero`, `HERO`, `Hero`).
pub fn parse_draft(input: &str) -> Result<Vec<TokenType>, DraftError> {
    let draft = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|name| {
            TokenType::from_name(name).ok_or_else(|| DraftError::UnknownToken(name.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if draft.is_empty() {
        return Err(DraftError::Empty);
    }
    Ok(draft)
}

/// Parses a list of drafts from a JSON string: `[["HERO","HERO"], ...]`.
pub fn parse_drafts_json(json: &str) -> Result<Vec<Vec<TokenType>>, DraftError> {
    Ok(serde_json::from_str(json)?)
}

/// Loads a list of drafts from a JSON file at the given path.
pub fn load_drafts(path: &Path) -> Result<Vec<Vec<TokenType>>, DraftError> {
    let data = fs::read_to_string(path).map_err(|source| DraftError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_drafts_json(&data)
}

/// Smallest and largest length of a random draft when none is given.
pub const RANDOM_DRAFT_LEN: RangeInclusive<usize> = 7..=9;

/// Picks a random draft length from `RANDOM_DRAFT_LEN`.
pub fn random_draft_len<R: Rng>(rng: &mut R) -> usize {
    rng.gen_range(RANDOM_DRAFT_LEN)
}

/// Draws a random draft of `len` tokens from the whole catalog.
///
/// Every type is equally likely at each draw, shared types included, but a
/// second Boar or Eagle is redrawn. The draft comes back in canonical order.
pub fn random_draft<R: Rng>(rng: &mut R, len: usize) -> Vec<TokenType> {
    let mut draft = Vec::with_capacity(len);
    while draft.len() < len {
        let candidate = ALL_TOKENS[rng.gen_range(0..ALL_TOKENS.len())];
        if candidate.is_shared() && draft.contains(&candidate) {
            continue;
        }
        draft.push(candidate);
    }
    canonical_sort(&mut draft);
    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TokenType::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn parses_commas_and_spaces() {
        assert_eq!(
            parse_draft("hero, Hero  CAPTAIN,soldier").unwrap(),
            vec![Hero, Hero, Captain, Soldier]
        );
    }

    #[test]
    fn rejects_unknown_names() {
        let err = parse_draft("hero,knight").unwrap_err();
        assert!(matches!(err, DraftError::UnknownToken(ref n) if n == "knight"));
        assert_eq!(err.to_string(), "unknown token type: 'knight'");
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(parse_draft(" , "), Err(DraftError::Empty)));
    }

    #[test]
    fn parses_json_drafts() {
        let drafts = parse_drafts_json(r#"[["HERO","TRAITOR"],["BOAR","MAGE","MAGE"]]"#).unwrap();
        assert_eq!(drafts, vec![vec![Hero, Traitor], vec![Boar, Mage, Mage]]);
        assert!(matches!(parse_drafts_json(r#"[["KNIGHT"]]"#), Err(DraftError::Json(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_drafts(Path::new("/nonexistent/drafts.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/drafts.json"));
    }

    #[test]
    fn random_draft_has_requested_length_and_one_of_each_shared() {
        let mut rng = SmallRng::seed_from_u64(7);
        for len in [2, 7, 9, 12] {
            for _ in 0..200 {
                let draft = random_draft(&mut rng, len);
                assert_eq!(draft.len(), len);
                assert!(draft.iter().filter(|t| **t == Boar).count() <= 1);
                assert!(draft.iter().filter(|t| **t == Eagle).count() <= 1);
                assert!(draft.windows(2).all(|w| w[0] <= w[1]));
            }
        }
    }

    #[test]
    fn random_draft_includes_shared_tokens() {
        let mut rng = SmallRng::seed_from_u64(3);
        let with_shared = (0..200)
            .map(|_| random_draft(&mut rng, 8))
            .filter(|d| d.iter().any(|t| t.is_shared()))
            .count();
        assert!(with_shared > 0);
    }

    #[test]
    fn default_length_is_seven_to_nine() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut seen = [false; 3];
        for _ in 0..300 {
            let len = random_draft_len(&mut rng);
            assert!(RANDOM_DRAFT_LEN.contains(&len));
            seen[len - 7] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn random_draft_is_reproducible_from_seed() {
        let a = random_draft(&mut SmallRng::seed_from_u64(42), 8);
        let b = random_draft(&mut SmallRng::seed_from_u64(42), 8);
        assert_eq!(a, b);
    }
}
