//! Cumulative play statistics blob

use super::{read_json, write_json};
use crate::error::ConfigError;
use crate::session::GameStatus;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Totals across finished rounds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameStats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub best_score: u32,
    /// Attempts needed -> number of rounds won with that many
    pub guess_distribution: BTreeMap<usize, u32>,
}

impl GameStats {
    /// Fold a round into the totals
    ///
    /// Rounds still in progress are ignored. Returns whether it was counted.
    pub fn record(&mut self, status: &GameStatus) -> bool {
        if !status.game_over || status.current_attempts == 0 {
            return false;
        }

        self.games_played += 1;
        if status.won {
            self.games_won += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
            *self
                .guess_distribution
                .entry(status.current_attempts)
                .or_insert(0) += 1;
            if let Some(score) = status.score() {
                self.best_score = self.best_score.max(score);
            }
        } else {
            self.current_streak = 0;
        }
        true
    }

    /// Fraction of rounds won, 0.0 before any round
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played)
        }
    }

    /// Load statistics, starting fresh if the file is missing or unusable
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        read_json(path).unwrap_or_else(|e| {
            warn!("{e}; starting with empty statistics");
            Self::default()
        })
    }

    /// Write statistics as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        write_json(path.as_ref(), self)
    }
}
