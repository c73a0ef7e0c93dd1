//! Formatting utilities for terminal output

use crate::core::{Color, Feedback};
use colored::Colorize;

/// Render feedback as colored letter tiles
#[must_use]
pub fn colored_feedback(feedback: &Feedback) -> String {
    feedback
        .entries()
        .iter()
        .map(|entry| {
            let tile = format!(" {} ", entry.letter.to_uppercase());
            match entry.color {
                Color::Green => tile.black().on_green().bold().to_string(),
                Color::Yellow => tile.black().on_yellow().bold().to_string(),
                Color::Red => tile.white().on_red().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many attempts of a round are used up
#[must_use]
pub fn attempts_bar(used: usize, max: usize) -> String {
    create_progress_bar(used as f64, max as f64, max)
}
