//! Player display metadata: names and icons.
//!
//! The roster is purely cosmetic; nothing in the rules keys off it.
//! Lookups never fail - unknown ids fall back to a defined default - and
//! writes are an unconditional overwrite for any id, known or not.

use rustc_hash::FxHashMap;

use crate::core::PlayerId;

/// Icon used for players without an explicit one.
pub const DEFAULT_ICON: &str = "🔵";

/// Names and icons for display, with defaults for unset players.
#[derive(Clone, Debug, Default)]
pub struct PlayerRoster {
    names: FxHashMap<PlayerId, String>,
    icons: FxHashMap<PlayerId, String>,
}

impl PlayerRoster {
    /// Create an empty roster; every lookup returns defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a player's name, or `"Player {id}"` if none is stored.
    #[must_use]
    pub fn name(&self, player: PlayerId) -> String {
        self.names
            .get(&player)
            .cloned()
            .unwrap_or_else(|| player.to_string())
    }

    /// Get a player's icon, or [`DEFAULT_ICON`] if none is stored.
    #[must_use]
    pub fn icon(&self, player: PlayerId) -> String {
        self.icons
            .get(&player)
            .cloned()
            .unwrap_or_else(|| DEFAULT_ICON.to_string())
    }

    /// Set a player's name.
    pub fn set_name(&mut self, player: PlayerId, name: impl Into<String>) {
        self.names.insert(player, name.into());
    }

    /// Set a player's icon.
    pub fn set_icon(&mut self, player: PlayerId, icon: impl Into<String>) {
        self.icons.insert(player, icon.into());
    }

    /// Set a player's name and icon in one call.
    ///
    /// Accepts any id, including ones outside the game's player range.
    pub fn set(&mut self, player: PlayerId, name: impl Into<String>, icon: impl Into<String>) {
        self.set_name(player, name);
        self.set_icon(player, icon);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let roster = PlayerRoster::new();

        assert_eq!(roster.name(PlayerId::new(1)), "Player 1");
        assert_eq!(roster.name(PlayerId::new(3)), "Player 3");
        assert_eq!(roster.icon(PlayerId::new(1)), DEFAULT_ICON);
    }

    #[test]
    fn test_set_and_get() {
        let mut roster = PlayerRoster::new();
        roster.set(PlayerId::new(1), "Alice", "🚀");

        assert_eq!(roster.name(PlayerId::new(1)), "Alice");
        assert_eq!(roster.icon(PlayerId::new(1)), "🚀");

        // Other players keep defaults
        assert_eq!(roster.name(PlayerId::new(2)), "Player 2");
        assert_eq!(roster.icon(PlayerId::new(2)), DEFAULT_ICON);
    }

    #[test]
    fn test_overwrite() {
        let mut roster = PlayerRoster::new();
        roster.set(PlayerId::new(2), "Bob", "⭐");
        roster.set(PlayerId::new(2), "Robert", "👑");

        assert_eq!(roster.name(PlayerId::new(2)), "Robert");
        assert_eq!(roster.icon(PlayerId::new(2)), "👑");
    }

    #[test]
    fn test_permissive_unknown_id() {
        let mut roster = PlayerRoster::new();

        // Ids outside any game's player range are accepted without complaint.
        roster.set(PlayerId::new(9), "Ghost", "💎");
        assert_eq!(roster.name(PlayerId::new(9)), "Ghost");
        assert_eq!(roster.icon(PlayerId::new(9)), "💎");
    }
}
