//! Per-letter guess feedback
//!
//! Feedback annotates each letter of a guess with one of three colors:
//! - Green = correct letter in the correct position
//! - Yellow = letter still available elsewhere in the target
//! - Red = letter absent, or every occurrence already claimed by an earlier match

use std::fmt;

/// Color assigned to a single guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Green,
    Yellow,
    Red,
}

impl Color {
    /// Single-letter code: `G`, `Y` or `R`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Red => 'R',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Red => '🟥',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One letter of a guess together with its color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackEntry {
    pub letter: char,
    pub color: Color,
}

/// Feedback for a whole guess, index-aligned with the guess letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<FeedbackEntry>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Both words must have the same number of letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches green and remove those
    ///    target letters from the leftover pool
    /// 2. Second pass: left to right, each remaining guess letter claims the
    ///    first unused occurrence in the pool and turns yellow; otherwise red
    ///
    /// A target letter is claimed by at most one guess position, so repeated
    /// letters are never over-counted.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Feedback;
    ///
    /// let feedback = Feedback::calculate("deeds", "speed");
    /// assert_eq!(feedback.code(), "YYGRY");
    /// ```
    #[must_use]
    pub fn calculate(guess: &str, target: &str) -> Self {
        let guess: Vec<char> = guess.chars().collect();
        let mut pool: Vec<Option<char>> = target.chars().map(Some).collect();
        debug_assert_eq!(guess.len(), pool.len(), "guess and target lengths differ");

        let mut colors = vec![Color::Red; guess.len()];

        // First pass: exact matches
        for (i, &letter) in guess.iter().enumerate() {
            if let Some(slot) = pool.get_mut(i)
                && *slot == Some(letter)
            {
                colors[i] = Color::Green;
                *slot = None;
            }
        }

        // Second pass: leftover pool, first unused occurrence wins
        for (i, &letter) in guess.iter().enumerate() {
            if colors[i] == Color::Green {
                continue;
            }
            if let Some(slot) = pool.iter_mut().find(|slot| **slot == Some(letter)) {
                colors[i] = Color::Yellow;
                *slot = None;
            }
        }

        Self(
            guess
                .into_iter()
                .zip(colors)
                .map(|(letter, color)| FeedbackEntry { letter, color })
                .collect(),
        )
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[FeedbackEntry] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every letter green
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|e| e.color == Color::Green)
    }

    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.count(Color::Green)
    }

    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.count(Color::Yellow)
    }

    fn count(&self, color: Color) -> usize {
        self.0.iter().filter(|e| e.color == color).count()
    }

    /// Color codes as a string like `"GYRRG"`
    #[must_use]
    pub fn code(&self) -> String {
        self.0.iter().map(|e| e.color.code()).collect()
    }

    /// Emoji row like `"🟩🟨🟥🟥🟩"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|e| e.color.emoji()).collect()
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a FeedbackEntry;
    type IntoIter = std::slice::Iter<'a, FeedbackEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched_occurrences(feedback: &Feedback, letter: char) -> usize {
        feedback
            .entries()
            .iter()
            .filter(|e| e.letter == letter && e.color != Color::Red)
            .count()
    }

    #[test]
    fn all_red() {
        let feedback = Feedback::calculate("abcde", "fghij");
        assert_eq!(feedback.code(), "RRRRR");
        assert_eq!(feedback.count_greens(), 0);
        assert_eq!(feedback.count_yellows(), 0);
    }

    #[test]
    fn all_green() {
        let feedback = Feedback::calculate("crane", "crane");
        assert!(feedback.is_perfect());
        assert_eq!(feedback.count_greens(), 5);
    }

    #[test]
    fn entries_are_index_aligned() {
        let feedback = Feedback::calculate("crane", "slate");
        let letters: String = feedback.entries().iter().map(|e| e.letter).collect();
        assert_eq!(letters, "crane");
        // C R A(green) N E(green); SLATE has no R
        assert_eq!(feedback.code(), "RRGRG");
    }

    #[test]
    fn erase_against_speed() {
        // e claims the first spare e, s claims s, the last e claims the second e
        let feedback = Feedback::calculate("erase", "speed");
        assert_eq!(feedback.code(), "YRRYY");
        assert_eq!(matched_occurrences(&feedback, 'e'), 2);
    }

    #[test]
    fn deeds_against_speed() {
        // Green e consumed first; second d finds no d left
        let feedback = Feedback::calculate("deeds", "speed");
        assert_eq!(feedback.code(), "YYGRY");
        assert_eq!(matched_occurrences(&feedback, 'd'), 1);
        assert_eq!(matched_occurrences(&feedback, 'e'), 2);
    }

    #[test]
    fn eerie_against_geese_never_over_counts() {
        let feedback = Feedback::calculate("eerie", "geese");
        assert_eq!(feedback.code(), "YGRRG");
        assert!(matched_occurrences(&feedback, 'e') <= 3);
    }

    #[test]
    fn green_takes_priority_over_earlier_yellow() {
        // ROBOT vs FLOOR: first O yellow, second O green
        let feedback = Feedback::calculate("robot", "floor");
        assert_eq!(feedback.code(), "YYRGR");
    }

    #[test]
    fn surplus_letters_stay_red() {
        let feedback = Feedback::calculate("lllll", "hello");
        assert_eq!(feedback.code(), "RRGGR");
        assert_eq!(matched_occurrences(&feedback, 'l'), 2);
    }

    #[test]
    fn non_ascii_letters() {
        let feedback = Feedback::calculate("éte", "tée");
        assert_eq!(feedback.code(), "YYG");
    }

    #[test]
    fn emoji_row() {
        let feedback = Feedback::calculate("robot", "floor");
        assert_eq!(feedback.to_emoji(), "🟨🟨🟥🟩🟥");
    }

    #[test]
    fn color_names() {
        assert_eq!(Color::Green.to_string(), "green");
        assert_eq!(Color::Yellow.name(), "yellow");
        assert_eq!(Color::Red.code(), 'R');
    }
}
