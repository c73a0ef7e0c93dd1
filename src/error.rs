//! Error types
//!
//! None of these are fatal: every failure leaves the session untouched and the
//! caller decides whether to re-prompt, retry or give up.

use std::path::PathBuf;
use thiserror::Error;

/// Recoverable failures of session operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// `select_library` was given a name missing from the catalog
    #[error("No library named '{0}'")]
    NoSuchLibrary(String),

    /// An operation needed a selected library
    #[error("No library selected")]
    NoLibrarySelected,

    /// The selected library has nothing of the requested length
    #[error("Library '{library}' has no words of length {length}")]
    NoWordsOfLength { library: String, length: usize },

    /// The guess was rejected; the round is unchanged
    #[error("Invalid guess: {0}")]
    InvalidGuess(#[from] InvalidGuess),

    /// The operation is only valid while a round is in progress
    #[error("No round in progress")]
    NoActiveRound,
}

/// Why a guess was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGuess {
    #[error("expected {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("'{0}' is not in the word list")]
    NotInLibrary(String),
}

/// A word-list file that could not be read while loading a directory
///
/// The file is skipped; the rest of the directory still loads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to load word list {}: {message}", .path.display())]
pub struct LoadFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Failures reading or writing the settings and statistics blobs
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_error_messages() {
        assert_eq!(
            GameError::NoSuchLibrary("cet6".into()).to_string(),
            "No library named 'cet6'"
        );
        assert_eq!(
            GameError::NoWordsOfLength {
                library: "cet4".into(),
                length: 12
            }
            .to_string(),
            "Library 'cet4' has no words of length 12"
        );
    }

    #[test]
    fn invalid_guess_converts() {
        let err: GameError = InvalidGuess::WrongLength {
            expected: 5,
            actual: 3,
        }
        .into();
        assert_eq!(err.to_string(), "Invalid guess: expected 5 letters, got 3");
    }

    #[test]
    fn load_failure_message() {
        let failure = LoadFailure {
            path: PathBuf::from("wordlib/bad.txt"),
            message: "stream did not contain valid UTF-8".into(),
        };
        assert_eq!(
            failure.to_string(),
            "Failed to load word list wordlib/bad.txt: stream did not contain valid UTF-8"
        );
    }
}
