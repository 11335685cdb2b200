//! Move records and status snapshots.
//!
//! `MoveResult` is the append-only history record for every roll applied
//! to a player, including rolls that overshoot the board and skip the
//! turn. `StatusSnapshot` is an owned copy of the observable game state;
//! callers cannot reach engine internals through it.

use serde::{Deserialize, Serialize};

use crate::board::{Square, Transition};
use crate::core::{PlayerId, PlayerMap};

/// The outcome of one applied dice roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// The player who moved.
    pub player: PlayerId,

    /// Position before the roll.
    pub old_position: Square,

    /// The dice value applied (1-6).
    pub dice_value: u8,

    /// Position directly after the roll, before snake/ladder resolution.
    /// May exceed the board size on an out-of-bounds roll.
    pub position_after_roll: Square,

    /// The snake or ladder taken, if the roll landed on one.
    pub transition: Option<Transition>,

    /// Position after snake/ladder resolution. Equals `old_position` on
    /// an out-of-bounds roll.
    pub final_position: Square,

    /// The roll would have carried the player past the last square; the
    /// move was voided and the turn skipped.
    pub out_of_bounds: bool,

    /// This move reached the last square and ended the game.
    pub won: bool,
}

/// An owned copy of the observable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Current square of every player.
    pub positions: PlayerMap<Square>,

    /// Whose turn is next. Stays on the winner once the game is over.
    pub current_player: PlayerId,

    /// A winner has been decided.
    pub game_over: bool,

    /// The winning player, set exactly once.
    pub winner: Option<PlayerId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_result_serde() {
        let result = MoveResult {
            player: PlayerId::new(1),
            old_position: 10,
            dice_value: 6,
            position_after_roll: 16,
            transition: Some(Transition::Snake { from: 16, to: 6 }),
            final_position: 6,
            out_of_bounds: false,
            won: false,
        };

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: MoveResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }

    #[test]
    fn test_status_snapshot_serde() {
        let status = StatusSnapshot {
            positions: PlayerMap::with_value(3, 0),
            current_player: PlayerId::new(1),
            game_over: false,
            winner: None,
        };

        let json = serde_json::to_string(&status).unwrap();
        let deserialized: StatusSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(status, deserialized);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut status = StatusSnapshot {
            positions: PlayerMap::with_value(2, 50),
            current_player: PlayerId::new(2),
            game_over: false,
            winner: None,
        };

        // Mutating the snapshot is fine; it aliases nothing.
        status.positions[PlayerId::new(1)] = 99;
        assert_eq!(status.positions[PlayerId::new(2)], 50);
    }
}
