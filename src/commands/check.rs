//! Feedback for an arbitrary guess/target pair

use crate::core::{Feedback, letter_count, normalize};
use crate::error::InvalidGuess;

/// Normalize both words and compute the feedback `guess` earns against `target`
///
/// # Errors
///
/// Returns [`InvalidGuess::WrongLength`] if the words differ in length.
pub fn check_guess(guess: &str, target: &str) -> Result<Feedback, InvalidGuess> {
    let guess = normalize(guess);
    let target = normalize(target);

    let expected = letter_count(&target);
    let actual = letter_count(&guess);
    if expected != actual {
        return Err(InvalidGuess::WrongLength { expected, actual });
    }

    Ok(Feedback::calculate(&guess, &target))
}
