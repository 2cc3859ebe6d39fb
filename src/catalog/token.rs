//! Token types and their color classification.
//!
//! The twelve token types are enumerated in canonical order. The
//! `#[repr(u8)]` discriminant doubles as the index into the rules table and
//! as the sort key used before every scoring pass.

use serde::{Deserialize, Serialize};

/// The number of token types in the catalog.
pub const TOKEN_COUNT: usize = 12;

/// A kind of unit that can be drafted.
///
/// Variants are declared in canonical order; the derived `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum TokenType {
    Hero = 0,
    Captain = 1,
    Soldier = 2,
    Cursed = 3,
    Mage = 4,
    Traitor = 5,
    Wolf = 6,
    Snake = 7,
    Horse = 8,
    Dragon = 9,
    Boar = 10,
    Eagle = 11,
}

/// All token types in canonical order.
pub const ALL_TOKENS: [TokenType; TOKEN_COUNT] = [
    TokenType::Hero,
    TokenType::Captain,
    TokenType::Soldier,
    TokenType::Cursed,
    TokenType::Mage,
    TokenType::Traitor,
    TokenType::Wolf,
    TokenType::Snake,
    TokenType::Horse,
    TokenType::Dragon,
    TokenType::Boar,
    TokenType::Eagle,
];

/// Token types that join both armies instead of being split.
pub const SHARED_TOKENS: [TokenType; 2] = [TokenType::Boar, TokenType::Eagle];

/// Which population of an army a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    White,
    Black,
}

impl TokenType {
    /// Returns the upper-case display name (`"HERO"`, `"WOLF"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            TokenType::Hero => "HERO",
            TokenType::Captain => "CAPTAIN",
            TokenType::Soldier => "SOLDIER",
            TokenType::Cursed => "CURSED",
            TokenType::Mage => "MAGE",
            TokenType::Traitor => "TRAITOR",
            TokenType::Wolf => "WOLF",
            TokenType::Snake => "SNAKE",
            TokenType::Horse => "HORSE",
            TokenType::Dragon => "DRAGON",
            TokenType::Boar => "BOAR",
            TokenType::Eagle => "EAGLE",
        }
    }

    /// Returns a one-line description of the token's value rule.
    pub const fn description(self) -> &'static str {
        match self {
            TokenType::Hero => "White unit worth +3. Pairs with a Traitor, which then loses 3.",
            TokenType::Captain => "White unit worth +2.",
            TokenType::Soldier => "White unit worth +1.",
            TokenType::Cursed => "White unit worth -1.",
            TokenType::Mage => "White unit worth the number of non-Mage white units in its army.",
            TokenType::Traitor => {
                "White unit worth +1, or -2 when paired with a Hero (one Traitor per Hero)."
            }
            TokenType::Wolf => {
                "Black unit worth double the smallest positive white unit value in its army."
            }
            TokenType::Snake => {
                "Black unit worth minus the smallest positive white unit value in its army."
            }
            TokenType::Horse => "Black unit worth the number of white units in its army.",
            TokenType::Dragon => "Black unit worth minus the number of white units in its army.",
            TokenType::Boar => {
                "Shared unit, in both armies. Worth the number of white units whose type appears \
                 at least twice in its army."
            }
            TokenType::Eagle => {
                "Shared unit, in both armies. Worth minus the number of white units whose type \
                 appears at least twice in its army."
            }
        }
    }

    /// Looks up a token type by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<TokenType> {
        ALL_TOKENS
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    /// Returns the color of this token type.
    pub fn color(self) -> Color {
        super::rules::entry(self).color
    }

    /// Returns true for WHITE token types.
    pub fn is_white(self) -> bool {
        self.color() == Color::White
    }

    /// Returns true for Boar and Eagle.
    pub const fn is_shared(self) -> bool {
        matches!(self, TokenType::Boar | TokenType::Eagle)
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
