//! Observable match state for transport layers.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::phase::Phase;
use super::record::GuessRecord;
use super::state::Match;
use crate::core::{Player, PlayerPair};

/// Everything a client may see about a match.
///
/// Captured after every transition and published by the transport layer;
/// also returned on initial room join. Secrets are never included —
/// `secret_set` only tells clients whether a seat finished setup, and the
/// win message is the only place a secret is ever revealed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Current lifecycle phase.
    pub phase: Phase,

    /// The player expected to act next while guessing.
    pub current_player: Player,

    /// The winner, once the match is over.
    pub winner: Option<Player>,

    /// Last user-facing status message.
    pub message: String,

    /// Whether each seat has set its secret.
    pub secret_set: PlayerPair<bool>,

    /// Both guess histories, in submission order.
    pub guesses: PlayerPair<Vector<GuessRecord>>,

    /// Turn timer length for client countdowns.
    pub turn_seconds: u16,
}

impl MatchSnapshot {
    pub(crate) fn capture(game: &Match) -> Self {
        Self {
            phase: game.phase(),
            current_player: game.current_player(),
            winner: game.winner(),
            message: game.message().to_string(),
            secret_set: PlayerPair::new(|p| game.secret_set(p)),
            guesses: PlayerPair::new(|p| game.guesses(p).clone()),
            turn_seconds: game.config().turn_seconds,
        }
    }
}
