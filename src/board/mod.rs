//! The board: squares and the fixed snake/ladder tables.

pub mod layout;

pub use layout::{BoardLayout, Square, Transition, BOARD_SIZE};
