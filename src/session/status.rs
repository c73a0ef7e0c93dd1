//! Read-only snapshot of a session

use super::scoring::calculate_score;
use crate::core::Difficulty;
use serde::Serialize;

/// Everything a host needs to render the current round
///
/// Before the first round the strings and lists are empty, the counters are
/// zero and `game_over` is `true`: nothing is in play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatus {
    pub target_word: String,
    pub word_length: usize,
    pub max_attempts: usize,
    pub current_attempts: usize,
    pub attempts: Vec<String>,
    pub game_over: bool,
    pub won: bool,
    pub remaining_attempts: usize,
    pub difficulty: Option<Difficulty>,
}

impl GameStatus {
    pub(crate) fn idle() -> Self {
        Self {
            target_word: String::new(),
            word_length: 0,
            max_attempts: 0,
            current_attempts: 0,
            attempts: Vec::new(),
            game_over: true,
            won: false,
            remaining_attempts: 0,
            difficulty: None,
        }
    }

    /// Score for a won round, `None` otherwise
    #[must_use]
    pub fn score(&self) -> Option<u32> {
        self.won
            .then(|| calculate_score(self.current_attempts, self.word_length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_status_is_terminal_and_empty() {
        let status = GameStatus::idle();
        assert!(status.game_over);
        assert!(!status.won);
        assert!(status.target_word.is_empty());
        assert!(status.attempts.is_empty());
        assert_eq!(status.remaining_attempts, 0);
        assert_eq!(status.score(), None);
    }

    #[test]
    fn score_only_when_won() {
        let mut status = GameStatus {
            target_word: "crane".into(),
            word_length: 5,
            max_attempts: 6,
            current_attempts: 2,
            attempts: vec!["slate".into(), "crane".into()],
            game_over: true,
            won: true,
            remaining_attempts: 4,
            difficulty: Some(Difficulty::Medium),
        };
        assert_eq!(status.score(), Some(115));

        status.won = false;
        assert_eq!(status.score(), None);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(GameStatus::idle()).unwrap();
        assert_eq!(json["gameOver"], true);
        assert_eq!(json["remainingAttempts"], 0);
        assert!(json["difficulty"].is_null());
    }
}
