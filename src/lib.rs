//! Wordle Game
//!
//! A single-player word guessing game: pick a word library, pick a word
//! length, then guess the hidden word with per-letter green/yellow/red feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::library::LibraryCatalog;
//! use wordle_game::session::GameSession;
//!
//! let mut session = GameSession::with_seed(1);
//! session.install_catalog(LibraryCatalog::from_words("demo", &["crane", "slate"]));
//! session.select_library("demo")?;
//! session.start_new_game(5)?;
//!
//! let feedback = session.make_guess("crane")?;
//! println!("{}", feedback.to_emoji());
//! # Ok::<(), wordle_game::GameError>(())
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Word libraries
pub mod library;

// Round lifecycle
pub mod session;

// Settings and statistics persistence
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{ConfigError, GameError, InvalidGuess, LoadFailure};
