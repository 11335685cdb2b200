//! Engine error types.
//!
//! Rule violations are data, not panics: the UI renders them directly.
//! An out-of-bounds roll is deliberately *not* an error - skipping a turn
//! is a normal outcome of play, reported via `MoveResult::out_of_bounds`.

use serde::{Deserialize, Serialize};

/// Errors the engine can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    /// Player count outside 2-4 at construction. Fatal to construction.
    InvalidConfiguration { player_count: usize },
    /// A move was attempted after a winner was decided. No state changed.
    GameAlreadyOver,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidConfiguration { player_count } => {
                write!(
                    f,
                    "number of players must be between 2 and 4, got {}",
                    player_count
                )
            }
            GameError::GameAlreadyOver => write!(f, "game is already over"),
        }
    }
}

impl std::error::Error for GameError {}
