//! Word normalization and classification
//!
//! Every length in this crate is measured in characters, not bytes, so word
//! lists containing non-ASCII letters still bucket correctly.

use serde::Serialize;
use std::fmt;

/// Normalize raw player or file input into the canonical stored form
///
/// Trims surrounding whitespace and lower-cases the result.
///
/// # Examples
/// ```
/// use wordle_game::core::normalize;
///
/// assert_eq!(normalize("  Crane\n"), "crane");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Number of letters in a word
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

/// Check that a word is non-empty and made only of letters
#[must_use]
pub fn is_alphabetic_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

/// Length-based difficulty bucket for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Bucket a word length: up to 3 is easy, up to 5 medium, up to 7 hard
    #[must_use]
    pub const fn for_length(length: usize) -> Self {
        match length {
            0..=3 => Self::Easy,
            4..=5 => Self::Medium,
            6..=7 => Self::Hard,
            _ => Self::Expert,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
