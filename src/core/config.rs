//! Match configuration.
//!
//! Collaborator layers configure a match at creation instead of the core
//! hardcoding room-wide constants. The defaults mirror the reference
//! client: a 30-second turn timer and Player 1 guessing first.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Configuration for a single match.
///
/// ## Example
///
/// ```
/// use digit_duel::{MatchConfig, Player};
///
/// let config = MatchConfig::new()
///     .with_turn_seconds(60)
///     .with_starting_player(Player::Two);
///
/// assert_eq!(config.turn_seconds, 60);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seconds a player has to guess before the collaborator layer
    /// forfeits their turn. The core never schedules this timer; the
    /// value is only republished in snapshots for client countdowns.
    pub turn_seconds: u16,

    /// The seat that guesses first once both secrets are set.
    pub starting_player: Player,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            turn_seconds: 30,
            starting_player: Player::One,
        }
    }
}

impl MatchConfig {
    /// Create a configuration with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the turn timer length.
    #[must_use]
    pub fn with_turn_seconds(mut self, seconds: u16) -> Self {
        self.turn_seconds = seconds;
        self
    }

    /// Set the seat that guesses first.
    #[must_use]
    pub fn with_starting_player(mut self, player: Player) -> Self {
        self.starting_player = player;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();

        assert_eq!(config.turn_seconds, 30);
        assert_eq!(config.starting_player, Player::One);
    }

    #[test]
    fn test_builder_methods() {
        let config = MatchConfig::new()
            .with_turn_seconds(45)
            .with_starting_player(Player::Two);

        assert_eq!(config.turn_seconds, 45);
        assert_eq!(config.starting_player, Player::Two);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = MatchConfig::new().with_turn_seconds(10);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
