//! Game sessions
//!
//! A session owns one library selection and one round at a time.

mod game;
mod scoring;
mod status;

pub use game::{Attempt, GameSession, Phase};
pub use scoring::calculate_score;
pub use status::GameStatus;
