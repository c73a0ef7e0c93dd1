//! Interactive play loop
//!
//! Text-based host around a [`GameSession`]. Input and output are generic so
//! the loop can run against stdin/stdout or in-memory buffers.

use crate::error::GameError;
use crate::output::{print_board, print_round_result, print_status};
use crate::session::{GameSession, GameStatus, Phase};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

const HELP: &str = "Commands: ':new' new round, ':status' show board, ':quit' exit";

/// Run rounds of `length` letters until the player quits or input ends
///
/// Starts a round unless one is already in progress. Returns the final
/// status of every round that finished.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if a round of `length`
/// cannot be started from the selected library.
pub fn run_play<R, I, W>(
    session: &mut GameSession<R>,
    length: usize,
    mut input: I,
    out: &mut W,
) -> Result<Vec<GameStatus>>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    if session.phase() != Phase::InRound {
        session.start_new_game(length)?;
    }

    writeln!(
        out,
        "\n{}",
        format!(
            "Guess the {length}-letter word from '{}'",
            session.current_library().unwrap_or_default()
        )
        .bright_cyan()
        .bold()
    )?;
    writeln!(out, "{HELP}\n")?;

    let mut finished = Vec::new();

    loop {
        if session.phase() == Phase::RoundOver {
            let status = session.status();
            print_round_result(out, &status)?;
            finished.push(status);

            match prompt(&mut input, out, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    session.start_new_game(length)?;
                    writeln!(out, "\nNew round started.\n")?;
                    continue;
                }
                _ => break,
            }
        }

        let status = session.status();
        let label = format!(
            "Guess {}/{}",
            status.current_attempts + 1,
            status.max_attempts
        );
        let Some(line) = prompt(&mut input, out, &label)? else {
            break;
        };

        match line.as_str() {
            "" => {}
            ":quit" | ":q" => break,
            ":help" => writeln!(out, "{HELP}")?,
            ":new" => {
                session.start_new_game(length)?;
                writeln!(out, "New round started.\n")?;
            }
            ":status" => {
                print_board(out, session.history())?;
                print_status(out, &session.status())?;
            }
            guess => match session.make_guess(guess) {
                Ok(_) => {
                    print_board(out, session.history())?;
                    print_status(out, &session.status())?;
                }
                Err(GameError::InvalidGuess(reason)) => {
                    writeln!(out, "{} {reason}", "✗".red())?;
                }
                Err(e) => return Err(e.into()),
            },
        }
    }

    writeln!(out, "\nThanks for playing!")?;
    Ok(finished)
}

/// Print a prompt and read one trimmed, lower-cased line; `None` at end of input
fn prompt<I: BufRead, W: Write>(input: &mut I, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
