//! # snakes-ladders
//!
//! A snakes-and-ladders game-state engine for 2-4 players.
//!
//! ## Design Principles
//!
//! 1. **Engine-only**: the crate owns rules, turn order, movement, and win
//!    detection. Rendering, input, and session flow belong to the caller.
//!
//! 2. **Errors are data**: in-game rule violations come back as `Result`
//!    values the UI can render. An overshooting roll is not an error at
//!    all - it is a normal skipped turn, flagged on the `MoveResult`.
//!
//! 3. **Deterministic when asked**: the dice are a seeded ChaCha8 stream,
//!    so a whole game replays identically from the same seed, and tests
//!    can bypass the dice entirely by feeding fixed values to
//!    `apply_move`.
//!
//! ## Modules
//!
//! - `core`: player ids, per-player storage, the dice roller
//! - `board`: the fixed 100-square layout with 15 snakes and 8 ladders
//! - `engine`: the `GameEngine` aggregate and its move/status types
//!
//! ## Example
//!
//! ```
//! use snakes_ladders::engine::GameEngine;
//!
//! let mut engine = GameEngine::new(2, 42).unwrap();
//!
//! let dice = engine.roll_dice();
//! let result = engine.apply_move(dice).unwrap();
//! assert_eq!(result.dice_value, dice);
//!
//! let status = engine.status();
//! assert!(!status.game_over);
//! ```

pub mod board;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{DiceRng, DiceRngState, PlayerId, PlayerMap, DICE_SIDES};

pub use crate::board::{BoardLayout, Square, Transition, BOARD_SIZE};

pub use crate::engine::{
    GameEngine, GameEngineBuilder, GameError, MoveResult, StatusSnapshot, MAX_PLAYERS, MIN_PLAYERS,
};
