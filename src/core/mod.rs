//! Core engine types: players and dice.
//!
//! This module contains the fundamental building blocks the engine is
//! assembled from: type-safe player ids with per-player storage, and the
//! deterministic dice roller.

pub mod player;
pub mod rng;

pub use player::{PlayerId, PlayerMap};
pub use rng::{DiceRng, DiceRngState, DICE_SIDES};
