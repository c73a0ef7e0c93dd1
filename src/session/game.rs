//! Game session: round lifecycle over a word store
//!
//! States move `NoLibrary -> LibrarySelected -> InRound -> RoundOver`.
//! Selecting a library always lands in `LibrarySelected`; starting a game is
//! allowed from any state that has a library.

use super::status::GameStatus;
use crate::core::{Difficulty, Feedback, letter_count, normalize};
use crate::error::{GameError, InvalidGuess};
use crate::library::{LibraryCatalog, LibraryInfo, WordStore};
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::path::Path;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    NoLibrary,
    LibrarySelected,
    InRound,
    RoundOver,
}

/// One accepted guess and the feedback it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub word: String,
    pub feedback: Feedback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Round {
    target: String,
    word_length: usize,
    max_attempts: usize,
    attempts: Vec<Attempt>,
    game_over: bool,
    won: bool,
}

/// A single-player session
///
/// Owns the word store, the active round and the randomness used to pick
/// targets. Not synchronized: a host sharing one across threads must wrap it.
///
/// # Examples
/// ```
/// use wordle_game::library::LibraryCatalog;
/// use wordle_game::session::GameSession;
///
/// let mut session = GameSession::with_seed(7);
/// session.install_catalog(LibraryCatalog::from_words("pets", &["cat", "dog"]));
/// session.select_library("pets")?;
/// session.start_new_game(3)?;
///
/// let target = session.status().target_word;
/// let feedback = session.make_guess(&target)?;
/// assert!(feedback.is_perfect());
/// assert!(session.status().won);
/// # Ok::<(), wordle_game::GameError>(())
/// ```
pub struct GameSession<R = StdRng> {
    store: WordStore,
    round: Option<Round>,
    rng: R,
}

impl GameSession<StdRng> {
    /// Session with an OS-seeded generator
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Session whose target choices are reproducible from `seed`
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for GameSession<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameSession<R> {
    /// Session drawing targets from a caller-supplied generator
    pub fn with_rng(rng: R) -> Self {
        Self {
            store: WordStore::new(),
            round: None,
            rng,
        }
    }

    /// Load libraries from a directory, replacing the current catalog
    pub fn load_libraries<P: AsRef<Path>>(&mut self, dir: P) -> &LibraryCatalog {
        let catalog = crate::library::loader::load_libraries(dir);
        self.install_catalog(catalog);
        self.store.catalog()
    }

    /// Replace the catalog
    ///
    /// The selection survives if the selected library still exists. The round
    /// survives only if, in addition, its target is still a member.
    pub fn install_catalog(&mut self, catalog: LibraryCatalog) {
        let selection_kept = self.store.install(catalog);
        if let Some(round) = &self.round
            && !(selection_kept && self.store.is_member(&round.target))
        {
            debug!("Dropping round; target '{}' is gone", round.target);
            self.round = None;
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &LibraryCatalog {
        self.store.catalog()
    }

    /// Select the library for subsequent rounds
    ///
    /// On success any active round is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoSuchLibrary`] for an unknown name; nothing changes.
    pub fn select_library(&mut self, name: &str) -> Result<(), GameError> {
        self.store.select_library(name)?;
        self.round = None;
        info!("Selected library '{name}'");
        Ok(())
    }

    #[must_use]
    pub fn current_library(&self) -> Option<&str> {
        self.store.current_name()
    }

    #[must_use]
    pub fn available_lengths(&self) -> Vec<usize> {
        self.store.available_lengths()
    }

    #[must_use]
    pub fn library_info(&self) -> Option<LibraryInfo> {
        self.store.library_info()
    }

    /// Case-insensitive membership in the selected library
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.store.is_member(word)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match (&self.round, self.store.current_name()) {
            (_, None) => Phase::NoLibrary,
            (None, Some(_)) => Phase::LibrarySelected,
            (Some(round), Some(_)) if round.game_over => Phase::RoundOver,
            (Some(_), Some(_)) => Phase::InRound,
        }
    }

    /// Start a round with a random target of `length` letters
    ///
    /// Resets the attempt history and sets `max_attempts` to `length + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoLibrarySelected`] or [`GameError::NoWordsOfLength`];
    /// the session is unchanged in both cases.
    pub fn start_new_game(&mut self, length: usize) -> Result<(), GameError> {
        let library = self.store.current().ok_or(GameError::NoLibrarySelected)?;
        let candidates = library.words_of_length(length);
        let target = candidates
            .choose(&mut self.rng)
            .map(|word| (*word).to_string())
            .ok_or_else(|| GameError::NoWordsOfLength {
                library: library.name().to_string(),
                length,
            })?;

        info!(
            "Starting round: {length} letters from '{}' ({} candidates)",
            library.name(),
            candidates.len()
        );
        trace!("Target word: {target}");

        self.round = Some(Round {
            target,
            word_length: length,
            max_attempts: length + 1,
            attempts: Vec::new(),
            game_over: false,
            won: false,
        });
        Ok(())
    }

    /// Submit a guess for the active round
    ///
    /// The guess is trimmed and lower-cased before validation.
    ///
    /// # Errors
    ///
    /// - [`GameError::NoActiveRound`] outside `InRound`
    /// - [`GameError::InvalidGuess`] for a wrong length or a word missing from
    ///   the library
    ///
    /// A rejected guess does not count as an attempt.
    pub fn make_guess(&mut self, word: &str) -> Result<Feedback, GameError> {
        let round = match self.round.as_mut() {
            Some(round) if !round.game_over => round,
            _ => return Err(GameError::NoActiveRound),
        };

        let guess = normalize(word);
        let actual = letter_count(&guess);
        if actual != round.word_length {
            debug!("Rejected '{guess}': {actual} letters");
            return Err(InvalidGuess::WrongLength {
                expected: round.word_length,
                actual,
            }
            .into());
        }
        if !self.store.is_member(&guess) {
            debug!("Rejected '{guess}': not in library");
            return Err(InvalidGuess::NotInLibrary(guess).into());
        }

        let feedback = Feedback::calculate(&guess, &round.target);
        let solved = guess == round.target;
        round.attempts.push(Attempt {
            word: guess,
            feedback: feedback.clone(),
        });

        if solved {
            round.game_over = true;
            round.won = true;
            info!("Round won in {} attempts", round.attempts.len());
        } else if round.attempts.len() >= round.max_attempts {
            round.game_over = true;
            round.won = false;
            info!("Round lost; the word was '{}'", round.target);
        }

        Ok(feedback)
    }

    /// Letter count of the round in progress
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveRound`] outside `InRound`.
    pub fn round_length(&self) -> Result<usize, GameError> {
        match &self.round {
            Some(round) if !round.game_over => Ok(round.word_length),
            _ => Err(GameError::NoActiveRound),
        }
    }

    /// Accepted guesses of the current or last round, oldest first
    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        self.round
            .as_ref()
            .map_or(&[], |round| round.attempts.as_slice())
    }

    /// Snapshot of the current round
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let Some(round) = &self.round else {
            return GameStatus::idle();
        };

        GameStatus {
            target_word: round.target.clone(),
            word_length: round.word_length,
            max_attempts: round.max_attempts,
            current_attempts: round.attempts.len(),
            attempts: round.attempts.iter().map(|a| a.word.clone()).collect(),
            game_over: round.game_over,
            won: round.won,
            remaining_attempts: round.max_attempts - round.attempts.len(),
            difficulty: Some(Difficulty::for_length(round.word_length)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use crate::library::WordLibrary;

    const WORDS: &[&str] = &[
        "crane", "slate", "irate", "speed", "erase", "deeds", "cat", "dog", "owl",
    ];

    fn session() -> GameSession {
        let mut session = GameSession::with_seed(42);
        session.install_catalog(LibraryCatalog::from_words("test", WORDS));
        session
    }

    fn started(length: usize) -> GameSession {
        let mut session = session();
        session.select_library("test").unwrap();
        session.start_new_game(length).unwrap();
        session
    }

    fn wrong_guesses(session: &GameSession, length: usize) -> Vec<&'static str> {
        let target = session.status().target_word;
        WORDS
            .iter()
            .copied()
            .filter(|w| w.len() == length && *w != target)
            .collect()
    }

    #[test]
    fn fresh_session_has_no_library() {
        let session = session();
        assert_eq!(session.phase(), Phase::NoLibrary);
        assert!(session.available_lengths().is_empty());
        assert!(session.library_info().is_none());
        assert!(!session.is_valid_word("crane"));
    }

    #[test]
    fn select_library_transitions() {
        let mut session = session();
        assert_eq!(
            session.select_library("missing"),
            Err(GameError::NoSuchLibrary("missing".into()))
        );
        assert_eq!(session.phase(), Phase::NoLibrary);

        session.select_library("test").unwrap();
        assert_eq!(session.phase(), Phase::LibrarySelected);
        assert_eq!(session.available_lengths(), vec![3, 5]);
    }

    #[test]
    fn start_requires_library() {
        let mut session = session();
        assert_eq!(session.start_new_game(5), Err(GameError::NoLibrarySelected));
        assert_eq!(session.status(), GameStatus::idle());
    }

    #[test]
    fn start_rejects_missing_length() {
        let mut session = session();
        session.select_library("test").unwrap();
        assert_eq!(
            session.start_new_game(4),
            Err(GameError::NoWordsOfLength {
                library: "test".into(),
                length: 4
            })
        );
        assert_eq!(session.phase(), Phase::LibrarySelected);
    }

    #[test]
    fn start_succeeds_for_every_available_length() {
        let mut session = session();
        session.select_library("test").unwrap();
        for length in session.available_lengths() {
            session.start_new_game(length).unwrap();
            let status = session.status();
            assert_eq!(letter_count(&status.target_word), length);
            assert!(session.is_valid_word(&status.target_word));
            assert_eq!(status.max_attempts, length + 1);
            assert_eq!(status.remaining_attempts, length + 1);
            assert!(!status.game_over);
            assert_eq!(session.phase(), Phase::InRound);
        }
    }

    #[test]
    fn seeded_sessions_pick_the_same_targets() {
        let mut a = started(5);
        let mut b = started(5);
        for _ in 0..5 {
            assert_eq!(a.status().target_word, b.status().target_word);
            a.start_new_game(5).unwrap();
            b.start_new_game(5).unwrap();
        }
    }

    #[test]
    fn guess_outside_round_fails() {
        let mut session = session();
        assert_eq!(session.make_guess("crane"), Err(GameError::NoActiveRound));
        session.select_library("test").unwrap();
        assert_eq!(session.make_guess("crane"), Err(GameError::NoActiveRound));
        assert_eq!(session.round_length(), Err(GameError::NoActiveRound));
    }

    #[test]
    fn wrong_length_guess_is_not_recorded() {
        let mut session = started(5);
        let before = session.status();
        assert_eq!(
            session.make_guess("cat"),
            Err(GameError::InvalidGuess(InvalidGuess::WrongLength {
                expected: 5,
                actual: 3
            }))
        );
        assert_eq!(session.status(), before);
    }

    #[test]
    fn unknown_word_is_not_recorded() {
        let mut session = started(5);
        assert_eq!(
            session.make_guess("zzzzz"),
            Err(GameError::InvalidGuess(InvalidGuess::NotInLibrary(
                "zzzzz".into()
            )))
        );
        assert_eq!(session.status().current_attempts, 0);
    }

    #[test]
    fn guesses_are_normalized() {
        let mut session = started(5);
        let guess = wrong_guesses(&session, 5)[0];
        let feedback = session.make_guess(&format!("  {}  ", guess.to_uppercase())).unwrap();
        assert_eq!(feedback.len(), 5);
        assert_eq!(session.status().attempts, vec![guess.to_string()]);
    }

    #[test]
    fn correct_guess_wins_immediately() {
        let mut session = started(5);
        let target = session.status().target_word;
        let feedback = session.make_guess(&target).unwrap();

        assert!(feedback.entries().iter().all(|e| e.color == Color::Green));
        let status = session.status();
        assert!(status.game_over);
        assert!(status.won);
        assert_eq!(status.remaining_attempts, 5);
        assert_eq!(session.phase(), Phase::RoundOver);
        assert_eq!(session.make_guess(&target), Err(GameError::NoActiveRound));
    }

    #[test]
    fn exhausting_attempts_loses() {
        let mut session = started(3);
        let wrong = wrong_guesses(&session, 3);
        let max = session.status().max_attempts;

        for i in 0..max {
            assert!(!session.status().game_over);
            session.make_guess(wrong[i % wrong.len()]).unwrap();
        }

        let status = session.status();
        assert!(status.game_over);
        assert!(!status.won);
        assert_eq!(status.current_attempts, max);
        assert_eq!(status.remaining_attempts, 0);
        assert_eq!(session.history().len(), max);
    }

    #[test]
    fn new_round_resets_but_keeps_library() {
        let mut session = started(5);
        let wrong = wrong_guesses(&session, 5)[0];
        session.make_guess(wrong).unwrap();

        session.start_new_game(3).unwrap();
        let status = session.status();
        assert!(status.attempts.is_empty());
        assert!(!status.game_over);
        assert!(!status.won);
        assert_eq!(status.word_length, 3);
        assert_eq!(session.current_library(), Some("test"));
    }

    #[test]
    fn selecting_library_drops_round() {
        let mut session = started(5);
        session.select_library("test").unwrap();
        assert_eq!(session.phase(), Phase::LibrarySelected);
        assert_eq!(session.status(), GameStatus::idle());
    }

    #[test]
    fn reload_without_selected_library_clears_round() {
        let mut session = started(5);
        session.install_catalog(LibraryCatalog::from_words("other", &["apple"]));
        assert_eq!(session.phase(), Phase::NoLibrary);
        assert!(session.history().is_empty());
    }

    #[test]
    fn reload_drops_round_whose_target_vanished() {
        let mut session = GameSession::with_seed(3);
        session.install_catalog(LibraryCatalog::from_words("fruit", &["apple"]));
        session.select_library("fruit").unwrap();
        session.start_new_game(5).unwrap();

        session.install_catalog(LibraryCatalog::from_words("fruit", &["kiwi"]));
        assert_eq!(session.phase(), Phase::LibrarySelected);
        assert_eq!(session.current_library(), Some("fruit"));
        assert_eq!(session.make_guess("apple"), Err(GameError::NoActiveRound));
        assert_eq!(session.status(), GameStatus::idle());
    }

    #[test]
    fn reload_keeps_round_whose_target_survives() {
        let mut session = GameSession::with_seed(3);
        session.install_catalog(LibraryCatalog::from_words("fruit", &["apple"]));
        session.select_library("fruit").unwrap();
        session.start_new_game(5).unwrap();

        session.install_catalog(LibraryCatalog::from_words("fruit", &["apple", "mango"]));
        assert_eq!(session.phase(), Phase::InRound);
        assert!(session.make_guess("apple").unwrap().is_perfect());
    }

    #[test]
    fn mixed_case_library_round_is_winnable() {
        let mut session = GameSession::with_seed(5);
        let mut catalog = LibraryCatalog::new();
        catalog.insert(WordLibrary::new("caps", vec!["Crane".into()]));
        session.install_catalog(catalog);
        session.select_library("caps").unwrap();
        session.start_new_game(5).unwrap();

        let target = session.status().target_word;
        assert_eq!(target, "crane");
        assert!(session.is_valid_word(&target));
        assert!(session.make_guess("CRANE").unwrap().is_perfect());
    }

    #[test]
    fn status_is_idempotent() {
        let mut session = started(5);
        session.make_guess(wrong_guesses(&session, 5)[0]).unwrap();
        assert_eq!(session.status(), session.status());
        assert_eq!(session.library_info(), session.library_info());
    }

    #[test]
    fn feedback_matches_target() {
        let mut session = GameSession::with_seed(1);
        let mut catalog = LibraryCatalog::new();
        catalog.insert(WordLibrary::new(
            "fixed",
            vec!["speed".into(), "erase".into(), "deeds".into()],
        ));
        session.install_catalog(catalog);
        session.select_library("fixed").unwrap();
        session.start_new_game(5).unwrap();

        let target = session.status().target_word;
        for guess in ["speed", "erase", "deeds"] {
            if guess == target {
                continue;
            }
            let feedback = session.make_guess(guess).unwrap();
            assert_eq!(feedback, Feedback::calculate(guess, &target));
        }
    }

    #[test]
    fn caller_supplied_rng() {
        let mut session = GameSession::with_rng(StdRng::seed_from_u64(9));
        session.install_catalog(LibraryCatalog::from_words("one", &["solo"]));
        session.select_library("one").unwrap();
        session.start_new_game(4).unwrap();
        assert_eq!(session.status().target_word, "solo");
        assert_eq!(session.round_length(), Ok(4));
    }
}
