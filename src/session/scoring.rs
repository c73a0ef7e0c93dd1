//! Round scoring

/// Points awarded for winning a round
///
/// Starts at 100, loses 10 per attempt after the first and gains 5 per
/// letter of the word. Never negative.
///
/// # Examples
/// ```
/// use wordle_game::session::calculate_score;
///
/// assert_eq!(calculate_score(1, 5), 125);
/// assert_eq!(calculate_score(3, 5), 105);
/// ```
#[must_use]
pub fn calculate_score(attempts: usize, word_length: usize) -> u32 {
    let penalty = u32::try_from(attempts.saturating_sub(1))
        .unwrap_or(u32::MAX)
        .saturating_mul(10);
    let bonus = u32::try_from(word_length)
        .unwrap_or(u32::MAX)
        .saturating_mul(5);
    100_u32.saturating_add(bonus).saturating_sub(penalty)
}
