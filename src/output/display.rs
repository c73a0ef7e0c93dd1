//! Display functions for libraries, rounds and statistics
//!
//! Every printer writes to a caller-supplied sink so interactive loops can be
//! driven from tests.

use super::formatters::{attempts_bar, colored_feedback, create_progress_bar};
use crate::config::GameStats;
use crate::library::{LibraryCatalog, LibraryInfo};
use crate::session::{Attempt, GameStatus};
use colored::Colorize;
use std::io::{self, Write};

/// One line per library, plus any files that failed to load
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_library_list<W: Write>(out: &mut W, catalog: &LibraryCatalog) -> io::Result<()> {
    if catalog.is_empty() {
        writeln!(out, "No word libraries found.")?;
    }
    for library in catalog.libraries() {
        let lengths: Vec<String> = library.lengths().iter().map(ToString::to_string).collect();
        writeln!(
            out,
            "  {:<16} {:>6} words   lengths: {}",
            library.name().bright_white().bold(),
            library.len(),
            lengths.join(", ")
        )?;
    }
    for failure in catalog.failures() {
        writeln!(out, "  {} {failure}", "skipped:".yellow())?;
    }
    Ok(())
}

/// Summary and length histogram of one library
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_library_info<W: Write>(out: &mut W, info: &LibraryInfo) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(50).cyan())?;
    writeln!(out, "Library: {}", info.name.bright_yellow().bold())?;
    writeln!(out, "{}", "─".repeat(50).cyan())?;
    writeln!(
        out,
        "   Words:          {} ({} unique)",
        info.total_words, info.unique_words
    )?;
    writeln!(out, "   Average length: {:.1}", info.average_length)?;

    let largest = info.length_histogram.values().copied().max().unwrap_or(0);
    for (length, count) in &info.length_histogram {
        let bar = create_progress_bar(*count as f64, largest as f64, 30);
        writeln!(out, "   {length:>2}: {} {count}", bar.green())?;
    }
    Ok(())
}

/// All guesses of a round as colored tile rows
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_board<W: Write>(out: &mut W, history: &[Attempt]) -> io::Result<()> {
    for (i, attempt) in history.iter().enumerate() {
        writeln!(
            out,
            "  {}. {}  {}",
            (i + 1).to_string().bright_black(),
            colored_feedback(&attempt.feedback),
            attempt.feedback.to_emoji()
        )?;
    }
    Ok(())
}

/// Attempts used and remaining
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_status<W: Write>(out: &mut W, status: &GameStatus) -> io::Result<()> {
    if status.word_length == 0 {
        return writeln!(out, "No round in progress.");
    }
    let difficulty = status
        .difficulty
        .map_or_else(String::new, |d| format!(" ({d})"));
    writeln!(
        out,
        "  {} letters{difficulty}   [{}] {} of {} attempts left",
        status.word_length,
        attempts_bar(status.current_attempts, status.max_attempts),
        status.remaining_attempts,
        status.max_attempts
    )
}

/// Banner for a finished round
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_round_result<W: Write>(out: &mut W, status: &GameStatus) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
    if status.won {
        let guesses = if status.current_attempts == 1 {
            "guess"
        } else {
            "guesses"
        };
        writeln!(
            out,
            "  {} Solved in {} {guesses}.",
            "You won!".bright_green().bold(),
            status.current_attempts
        )?;
        if let Some(score) = status.score() {
            writeln!(out, "  Score: {}", score.to_string().bright_yellow().bold())?;
        }
    } else {
        writeln!(
            out,
            "  {} The word was {}.",
            "Out of attempts.".red().bold(),
            status.target_word.to_uppercase().bright_white().bold()
        )?;
    }
    writeln!(out, "{}", "═".repeat(50).bright_cyan())
}

/// Cumulative statistics with a guess distribution chart
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_stats<W: Write>(out: &mut W, stats: &GameStats) -> io::Result<()> {
    writeln!(out, "\n{}", "Statistics:".bright_cyan().bold())?;
    writeln!(out, "   Played:      {}", stats.games_played)?;
    writeln!(out, "   Win rate:    {:.0}%", stats.win_rate() * 100.0)?;
    writeln!(
        out,
        "   Streak:      {} (best {})",
        stats.current_streak, stats.max_streak
    )?;
    writeln!(out, "   Best score:  {}", stats.best_score)?;

    let largest = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for (attempts, count) in &stats.guess_distribution {
        let bar = create_progress_bar(f64::from(*count), f64::from(largest), 30);
        writeln!(out, "   {attempts:>2}: {} {count}", bar.green())?;
    }
    Ok(())
}
