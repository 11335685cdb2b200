//! The fixed 100-square board.
//!
//! ## BoardLayout
//!
//! Holds the snake and ladder tables. The tables are constants baked into
//! every layout: 15 snakes against 8 ladders, biasing difficulty downward.
//! They are built once at construction and never mutated.
//!
//! ## Transition
//!
//! The result of landing exactly on a snake head or ladder foot. Lookup is
//! a single step on the landed square: a ladder that carries a player onto
//! a snake head does not chain into the snake.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A board square. 0 means not yet entered; 100 is the winning square.
pub type Square = u8;

/// Number of squares on the board.
pub const BOARD_SIZE: Square = 100;

/// Snake head -> tail pairs. Every tail is strictly below its head.
const SNAKES: [(Square, Square); 15] = [
    (16, 6),
    (47, 26),
    (49, 11),
    (56, 53),
    (59, 38),
    (62, 19),
    (73, 58),
    (77, 45),
    (78, 52),
    (84, 74),
    (87, 64),
    (92, 71),
    (93, 73),
    (95, 75),
    (98, 79),
];

/// Ladder foot -> top pairs. Every top is strictly above its foot.
const LADDERS: [(Square, Square); 8] = [
    (2, 38),
    (7, 15),
    (21, 42),
    (28, 84),
    (36, 55),
    (51, 67),
    (72, 91),
    (80, 98),
];

/// A snake or ladder encountered by landing exactly on its entry square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// Landed on a snake head; the player slides down to the tail.
    Snake { from: Square, to: Square },
    /// Landed on a ladder foot; the player climbs to the top.
    Ladder { from: Square, to: Square },
}

impl Transition {
    /// The square the player ends up on.
    #[must_use]
    pub fn destination(self) -> Square {
        match self {
            Transition::Snake { to, .. } | Transition::Ladder { to, .. } => to,
        }
    }

    /// Check if this transition is a snake.
    #[must_use]
    pub fn is_snake(self) -> bool {
        matches!(self, Transition::Snake { .. })
    }

    /// Check if this transition is a ladder.
    #[must_use]
    pub fn is_ladder(self) -> bool {
        matches!(self, Transition::Ladder { .. })
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transition::Snake { from, to } => write!(f, "Snake: {} → {}", from, to),
            Transition::Ladder { from, to } => write!(f, "Ladder: {} → {}", from, to),
        }
    }
}

/// The fixed snake and ladder tables.
///
/// Snake heads and ladder feet are disjoint key sets, so at most one
/// transition applies to any square.
#[derive(Clone, Debug)]
pub struct BoardLayout {
    snakes: FxHashMap<Square, Square>,
    ladders: FxHashMap<Square, Square>,
}

impl BoardLayout {
    /// Create the standard board: 15 snakes, 8 ladders.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            snakes: SNAKES.iter().copied().collect(),
            ladders: LADDERS.iter().copied().collect(),
        }
    }

    /// Look up the transition for landing exactly on `square`.
    ///
    /// Snakes are checked first; the key sets are disjoint so the order
    /// never matters.
    #[must_use]
    pub fn transition(&self, square: Square) -> Option<Transition> {
        if let Some(&to) = self.snakes.get(&square) {
            return Some(Transition::Snake { from: square, to });
        }
        self.ladders
            .get(&square)
            .map(|&to| Transition::Ladder { from: square, to })
    }

    /// The snake table (head -> tail), for display.
    #[must_use]
    pub fn snakes(&self) -> &FxHashMap<Square, Square> {
        &self.snakes
    }

    /// The ladder table (foot -> top), for display.
    #[must_use]
    pub fn ladders(&self) -> &FxHashMap<Square, Square> {
        &self.ladders
    }

    /// Number of snakes on the board.
    #[must_use]
    pub fn snake_count(&self) -> usize {
        self.snakes.len()
    }

    /// Number of ladders on the board.
    #[must_use]
    pub fn ladder_count(&self) -> usize {
        self.ladders.len()
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_counts() {
        let board = BoardLayout::standard();
        assert_eq!(board.snake_count(), 15);
        assert_eq!(board.ladder_count(), 8);
    }

    #[test]
    fn test_snakes_go_down() {
        let board = BoardLayout::standard();
        for (&head, &tail) in board.snakes() {
            assert!(tail < head, "snake {} -> {} does not go down", head, tail);
        }
    }

    #[test]
    fn test_ladders_go_up() {
        let board = BoardLayout::standard();
        for (&foot, &top) in board.ladders() {
            assert!(top > foot, "ladder {} -> {} does not go up", foot, top);
        }
    }

    #[test]
    fn test_keys_disjoint() {
        let board = BoardLayout::standard();
        for head in board.snakes().keys() {
            assert!(
                !board.ladders().contains_key(head),
                "square {} is both a snake head and a ladder foot",
                head
            );
        }
    }

    #[test]
    fn test_all_squares_in_bounds() {
        let board = BoardLayout::standard();
        let entries = board.snakes().iter().chain(board.ladders().iter());
        for (&from, &to) in entries {
            assert!((1..=BOARD_SIZE).contains(&from));
            assert!((1..=BOARD_SIZE).contains(&to));
        }
    }

    #[test]
    fn test_transition_snake() {
        let board = BoardLayout::standard();
        let t = board.transition(16).unwrap();

        assert_eq!(t, Transition::Snake { from: 16, to: 6 });
        assert!(t.is_snake());
        assert_eq!(t.destination(), 6);
        assert_eq!(t.to_string(), "Snake: 16 → 6");
    }

    #[test]
    fn test_transition_ladder() {
        let board = BoardLayout::standard();
        let t = board.transition(2).unwrap();

        assert_eq!(t, Transition::Ladder { from: 2, to: 38 });
        assert!(t.is_ladder());
        assert_eq!(t.destination(), 38);
        assert_eq!(t.to_string(), "Ladder: 2 → 38");
    }

    #[test]
    fn test_transition_plain_square() {
        let board = BoardLayout::standard();

        assert_eq!(board.transition(1), None);
        assert_eq!(board.transition(6), None);
        assert_eq!(board.transition(100), None);
    }

    #[test]
    fn test_transition_serde() {
        let t = Transition::Snake { from: 16, to: 6 };
        let json = serde_json::to_string(&t).unwrap();
        let deserialized: Transition = serde_json::from_str(&json).unwrap();
        assert_eq!(t, deserialized);
    }
}
