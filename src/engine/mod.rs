//! The game engine: rules, moves, errors, and player metadata.

pub mod error;
pub mod game;
pub mod moves;
pub mod roster;

pub use error::GameError;
pub use game::{GameEngine, GameEngineBuilder, MAX_PLAYERS, MIN_PLAYERS};
pub use moves::{MoveResult, StatusSnapshot};
pub use roster::{PlayerRoster, DEFAULT_ICON};
