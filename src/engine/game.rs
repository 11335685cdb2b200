//! The game engine: turn progression, movement, and win detection.
//!
//! ## GameEngine
//!
//! Owns all mutable game state for one session: positions, turn order,
//! history, the fixed board tables, and the dice roller. The presentation
//! layer drives it through `roll_dice` / `apply_move` and reads it through
//! `status` / `move_history`.
//!
//! ## Turn order
//!
//! Strict round-robin over 1-based ids: `(current % n) + 1`, wrapping from
//! the highest id back to 1. A skipped (out-of-bounds) turn still advances;
//! the winning move does not, freezing the game on the winner's turn.
//!
//! The engine is single-threaded and synchronous. Callers sharing one
//! engine across threads must serialize access externally.

use im::Vector;
use log::{debug, trace};

use crate::board::{BoardLayout, Square, Transition, BOARD_SIZE};
use crate::core::{DiceRng, PlayerId, PlayerMap, DICE_SIDES};

use super::error::GameError;
use super::moves::{MoveResult, StatusSnapshot};
use super::roster::PlayerRoster;

/// Minimum number of players.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of players.
pub const MAX_PLAYERS: usize = 4;

/// A snakes-and-ladders game session for 2-4 players.
#[derive(Clone, Debug)]
pub struct GameEngine {
    player_count: usize,
    positions: PlayerMap<Square>,
    current_player: PlayerId,
    game_over: bool,
    winner: Option<PlayerId>,
    board: BoardLayout,
    roster: PlayerRoster,
    history: PlayerMap<Vector<MoveResult>>,
    rng: DiceRng,
}

/// Builder for creating a [`GameEngine`].
///
/// ## Example
///
/// ```
/// use snakes_ladders::core::PlayerId;
/// use snakes_ladders::engine::GameEngineBuilder;
///
/// let engine = GameEngineBuilder::new()
///     .player_count(3)
///     .player_name(PlayerId::new(1), "Alice")
///     .player_icon(PlayerId::new(1), "🚀")
///     .build(42)
///     .unwrap();
///
/// assert_eq!(engine.player_count(), 3);
/// assert_eq!(engine.player_name(PlayerId::new(1)), "Alice");
/// ```
pub struct GameEngineBuilder {
    player_count: usize,
    names: Vec<(PlayerId, String)>,
    icons: Vec<(PlayerId, String)>,
}

impl Default for GameEngineBuilder {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            names: Vec::new(),
            icons: Vec::new(),
        }
    }
}

impl GameEngineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of players. Validated at `build`.
    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Override a player's display name.
    #[must_use]
    pub fn player_name(mut self, player: PlayerId, name: impl Into<String>) -> Self {
        self.names.push((player, name.into()));
        self
    }

    /// Override a player's display icon.
    #[must_use]
    pub fn player_icon(mut self, player: PlayerId, icon: impl Into<String>) -> Self {
        self.icons.push((player, icon.into()));
        self
    }

    /// Build the engine with a fixed dice seed.
    ///
    /// Fails with [`GameError::InvalidConfiguration`] if the player count
    /// is outside 2-4.
    pub fn build(self, seed: u64) -> Result<GameEngine, GameError> {
        self.build_with_rng(DiceRng::new(seed))
    }

    /// Build the engine with dice seeded from OS entropy.
    pub fn build_from_entropy(self) -> Result<GameEngine, GameError> {
        self.build_with_rng(DiceRng::from_entropy())
    }

    fn build_with_rng(self, rng: DiceRng) -> Result<GameEngine, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidConfiguration {
                player_count: self.player_count,
            });
        }

        let mut roster = PlayerRoster::new();
        for (player, name) in self.names {
            roster.set_name(player, name);
        }
        for (player, icon) in self.icons {
            roster.set_icon(player, icon);
        }

        debug!("new game: {} players, seed {}", self.player_count, rng.seed());

        Ok(GameEngine {
            player_count: self.player_count,
            positions: PlayerMap::with_value(self.player_count, 0),
            current_player: PlayerId::new(1),
            game_over: false,
            winner: None,
            board: BoardLayout::standard(),
            roster,
            history: PlayerMap::with_default(self.player_count),
            rng,
        })
    }
}

impl GameEngine {
    /// Create an engine with default names and icons.
    ///
    /// Fails with [`GameError::InvalidConfiguration`] unless
    /// `player_count` is in 2-4.
    pub fn new(player_count: usize, seed: u64) -> Result<Self, GameError> {
        GameEngineBuilder::new().player_count(player_count).build(seed)
    }

    /// Start building an engine.
    #[must_use]
    pub fn builder() -> GameEngineBuilder {
        GameEngineBuilder::new()
    }

    /// Number of players in this session.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Iterate over all player ids in this session.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count)
    }

    /// The player whose turn is next.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// A winner has been decided.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// The winning player, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// A player's current square.
    ///
    /// Panics for ids outside the session's player range.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> Square {
        self.positions[player]
    }

    /// Roll the dice: uniform in 1..=6.
    ///
    /// Only advances the dice stream; game state is untouched, so the
    /// caller can display the raw roll before feeding it to
    /// [`GameEngine::apply_move`].
    pub fn roll_dice(&mut self) -> u8 {
        self.rng.roll()
    }

    /// Apply a dice roll to the current player.
    ///
    /// - An overshoot past square 100 voids the move: the position is
    ///   unchanged, the result is flagged `out_of_bounds`, and the turn is
    ///   skipped. Not an error.
    /// - Landing exactly on a snake head or ladder foot resolves to its
    ///   tail/top in the same move (single lookup, no chaining).
    /// - Reaching square 100 ends the game; the turn does not advance.
    ///
    /// Fails with [`GameError::GameAlreadyOver`] once a winner is decided;
    /// nothing is mutated in that case.
    pub fn apply_move(&mut self, dice_value: u8) -> Result<MoveResult, GameError> {
        debug_assert!(
            (1..=DICE_SIDES).contains(&dice_value),
            "dice value must be 1-6, got {}",
            dice_value
        );

        if self.game_over {
            return Err(GameError::GameAlreadyOver);
        }

        let player = self.current_player;
        let old_position = self.positions[player];
        let position_after_roll = old_position + dice_value;

        if position_after_roll > BOARD_SIZE {
            let result = MoveResult {
                player,
                old_position,
                dice_value,
                position_after_roll,
                transition: None,
                final_position: old_position,
                out_of_bounds: true,
                won: false,
            };
            self.history[player].push_back(result.clone());
            debug!(
                "{player} rolled {dice_value}: {old_position} + {dice_value} overshoots, turn skipped"
            );
            self.advance_turn();
            return Ok(result);
        }

        let transition = self.board.transition(position_after_roll);
        let final_position = transition.map_or(position_after_roll, Transition::destination);
        self.positions[player] = final_position;

        let won = final_position == BOARD_SIZE;
        let result = MoveResult {
            player,
            old_position,
            dice_value,
            position_after_roll,
            transition,
            final_position,
            out_of_bounds: false,
            won,
        };
        self.history[player].push_back(result.clone());

        if let Some(t) = transition {
            debug!("{player}: {t}");
        }
        trace!("{player} moved {old_position} -> {final_position}");

        if won {
            self.game_over = true;
            self.winner = Some(player);
            debug!("{player} wins");
        } else {
            self.advance_turn();
        }

        Ok(result)
    }

    /// An owned copy of the observable game state.
    #[must_use]
    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            positions: self.positions.clone(),
            current_player: self.current_player,
            game_over: self.game_over,
            winner: self.winner,
        }
    }

    /// The fixed snake and ladder tables, for display.
    #[must_use]
    pub fn board(&self) -> &BoardLayout {
        &self.board
    }

    /// All recorded moves for a player, in chronological order.
    ///
    /// Empty for a player with no moves yet or for an unknown id.
    #[must_use]
    pub fn move_history(&self, player: PlayerId) -> Vector<MoveResult> {
        self.history.try_get(player).cloned().unwrap_or_default()
    }

    /// Players and their squares, sorted by descending position.
    ///
    /// Ties break on ascending player id.
    #[must_use]
    pub fn standings(&self) -> Vec<(PlayerId, Square)> {
        let mut standings: Vec<_> = self.positions.iter().map(|(p, &s)| (p, s)).collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        standings
    }

    /// Reset to the initial state: positions 0, player 1 to move, no
    /// winner, empty history.
    ///
    /// The player count, names, icons, board tables, and dice stream are
    /// preserved.
    pub fn reset(&mut self) {
        self.positions = PlayerMap::with_value(self.player_count, 0);
        self.current_player = PlayerId::new(1);
        self.game_over = false;
        self.winner = None;
        self.history = PlayerMap::with_default(self.player_count);
        debug!("game reset ({} players)", self.player_count);
    }

    /// A player's display name, or `"Player {id}"` if unset.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> String {
        self.roster.name(player)
    }

    /// A player's display icon, or the default if unset.
    #[must_use]
    pub fn player_icon(&self, player: PlayerId) -> String {
        self.roster.icon(player)
    }

    /// Set a player's name and icon. Unconditional overwrite; any id is
    /// accepted, including ids outside the session's player range.
    pub fn set_player_info(
        &mut self,
        player: PlayerId,
        name: impl Into<String>,
        icon: impl Into<String>,
    ) {
        self.roster.set(player, name, icon);
    }

    /// Round-robin advance: wrap from the highest id back to 1.
    fn advance_turn(&mut self) {
        let next = (self.current_player.raw() as usize % self.player_count) as u8 + 1;
        self.current_player = PlayerId::new(next);
    }

    /// Put a player on a square directly. Test scaffolding for exact
    /// scenario setups.
    #[cfg(test)]
    fn place(&mut self, player: PlayerId, square: Square) {
        self.positions[player] = square;
    }
}
