//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types: word normalization and
//! the feedback algorithm. All types here are pure and free of I/O.

mod feedback;
mod word;

pub use feedback::{Color, Feedback, FeedbackEntry};
pub use word::{Difficulty, is_alphabetic_word, letter_count, normalize};
