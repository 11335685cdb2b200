//! Deterministic dice rolling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical roll sequence
//! - **Uniform**: Every face 1-6 is equally likely
//! - **Serializable**: O(1) state capture and restore
//!
//! Rolling is kept separate from movement so callers can display the raw
//! roll before resolving it, and so tests can feed fixed values into the
//! engine instead of going through the RNG at all.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Number of faces on the die.
pub const DICE_SIDES: u8 = 6;

/// Deterministic 6-sided dice roller.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a new dice roller with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a dice roller seeded from the OS entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Roll the die: a uniformly random value in 1..=6.
    pub fn roll(&mut self) -> u8 {
        self.inner.gen_range(1..=DICE_SIDES)
    }

    /// Get the seed this roller was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DiceRngState {
        DiceRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DiceRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable dice-roller state.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many rolls have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = DiceRng::new(42);
        let mut rng2 = DiceRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll(), rng2.roll());
        }
    }

    #[test]
    fn test_rolls_in_range() {
        let mut rng = DiceRng::new(42);

        for _ in 0..1000 {
            let roll = rng.roll();
            assert!((1..=6).contains(&roll), "roll {} out of range", roll);
        }
    }

    #[test]
    fn test_all_faces_appear() {
        let mut rng = DiceRng::new(42);
        let mut seen = [false; 6];

        for _ in 0..1000 {
            seen[rng.roll() as usize - 1] = true;
        }

        assert!(seen.iter().all(|&s| s), "not all faces rolled: {:?}", seen);
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = DiceRng::new(1);
        let mut rng2 = DiceRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = DiceRng::new(42);

        // Advance the roller
        for _ in 0..100 {
            rng.roll();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.roll()).collect();

        let mut restored = DiceRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = DiceRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: DiceRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_from_entropy_rolls() {
        let mut rng = DiceRng::from_entropy();

        for _ in 0..100 {
            assert!((1..=6).contains(&rng.roll()));
        }
    }
}
