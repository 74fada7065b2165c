//! Typed saved form of a match.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Code, MatchConfig, Player, PlayerPair, Score};
use crate::game::state::Seat;
use crate::game::{GuessRecord, Match, Phase};

/// Why stored bytes were rejected.
#[derive(Debug, Error)]
pub enum RestoreError {
    /// The bytes did not decode as a `SavedMatch`. Codes inside the
    /// payload are re-validated during decoding, so a tampered code
    /// surfaces here too.
    #[error(transparent)]
    Codec(#[from] bincode::Error),

    /// A stored score disagrees with a recomputation against the
    /// opponent's secret.
    #[error("stored score for {player}'s guess #{index} does not match a recomputation")]
    ScoreMismatch { player: Player, index: usize },

    /// The stored fields cannot describe a reachable match state.
    #[error("stored state is incoherent: {0}")]
    Incoherent(&'static str),
}

/// Plain-data mirror of a match for serialization.
///
/// Produced by `capture`; turned back into a `Match` only through
/// `restore`, which re-checks everything the stored bytes claim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedMatch {
    pub config: MatchConfig,
    pub phase: Phase,
    pub current_player: Player,
    pub winner: Option<Player>,
    pub message: String,
    pub secrets: PlayerPair<Option<Code>>,
    pub guesses: PlayerPair<Vec<GuessRecord>>,
}

impl SavedMatch {
    /// Capture a match for storage.
    #[must_use]
    pub fn capture(game: &Match) -> Self {
        Self {
            config: game.config(),
            phase: game.phase(),
            current_player: game.current_player(),
            winner: game.winner(),
            message: game.message().to_string(),
            secrets: PlayerPair::new(|p| game.secret(p)),
            guesses: PlayerPair::new(|p| game.guesses(p).iter().copied().collect()),
        }
    }

    /// Rebuild a match, validating every stored field.
    pub fn restore(self) -> Result<Match, RestoreError> {
        self.check_phase_coherence()?;
        self.check_scores()?;

        let seats = PlayerPair::new(|p| Seat {
            secret: self.secrets[p],
            guesses: self.guesses[p].iter().copied().collect::<Vector<_>>(),
        });
        Ok(Match::from_parts(
            self.config,
            self.phase,
            self.current_player,
            self.winner,
            self.message,
            seats,
        ))
    }

    fn check_phase_coherence(&self) -> Result<(), RestoreError> {
        let both_secrets = Player::both().all(|p| self.secrets[p].is_some());
        match self.phase {
            Phase::SettingSecrets => {
                if self.winner.is_some() {
                    return Err(RestoreError::Incoherent("winner before the game started"));
                }
                if Player::both().any(|p| !self.guesses[p].is_empty()) {
                    return Err(RestoreError::Incoherent("guesses recorded during setup"));
                }
                if both_secrets {
                    return Err(RestoreError::Incoherent("both secrets set but still in setup"));
                }
            }
            Phase::Guessing => {
                if self.winner.is_some() {
                    return Err(RestoreError::Incoherent("winner while still guessing"));
                }
                if !both_secrets {
                    return Err(RestoreError::Incoherent("guessing without both secrets"));
                }
            }
            Phase::Over => {
                if !both_secrets {
                    return Err(RestoreError::Incoherent("game over without both secrets"));
                }
                let Some(winner) = self.winner else {
                    return Err(RestoreError::Incoherent("game over without a winner"));
                };
                let won = self.guesses[winner]
                    .last()
                    .is_some_and(|record| record.score.is_exact());
                if !won {
                    return Err(RestoreError::Incoherent("winner without a winning guess"));
                }
            }
        }
        Ok(())
    }

    fn check_scores(&self) -> Result<(), RestoreError> {
        for player in Player::both() {
            let Some(secret) = self.secrets[player.opponent()] else {
                // Phase coherence already guarantees histories are empty here.
                continue;
            };
            for (index, record) in self.guesses[player].iter().enumerate() {
                if Score::evaluate(secret, record.guess) != record.score {
                    return Err(RestoreError::ScoreMismatch { player, index });
                }
            }
        }
        Ok(())
    }
}

/// Serialize a match with bincode.
pub fn encode(game: &Match) -> Result<Vec<u8>, RestoreError> {
    Ok(bincode::serialize(&SavedMatch::capture(game))?)
}

/// Deserialize and validate a match from bincode bytes.
pub fn decode(bytes: &[u8]) -> Result<Match, RestoreError> {
    bincode::deserialize::<SavedMatch>(bytes)?.restore()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchConfig;

    fn mid_game() -> Match {
        let mut game = Match::new(MatchConfig::default());
        game.submit_secret(Player::One, "1234").unwrap();
        game.submit_secret(Player::Two, "5678").unwrap();
        game.submit_guess(Player::One, "5687").unwrap();
        game.submit_guess(Player::Two, "4321").unwrap();
        game
    }

    #[test]
    fn test_round_trip_mid_game() {
        let game = mid_game();

        let bytes = encode(&game).unwrap();
        let restored = decode(&bytes).unwrap();

        assert_eq!(restored.snapshot(), game.snapshot());
        // A restored match keeps playing.
        let mut restored = restored;
        let score = restored.submit_guess(Player::One, "5678").unwrap();
        assert!(score.is_exact());
    }

    #[test]
    fn test_round_trip_every_phase() {
        let mut game = Match::new(MatchConfig::default());
        assert_eq!(decode(&encode(&game).unwrap()).unwrap().snapshot(), game.snapshot());

        game.submit_secret(Player::One, "1234").unwrap();
        assert_eq!(decode(&encode(&game).unwrap()).unwrap().snapshot(), game.snapshot());

        game.submit_secret(Player::Two, "5678").unwrap();
        assert_eq!(decode(&encode(&game).unwrap()).unwrap().snapshot(), game.snapshot());

        game.submit_guess(Player::One, "5678").unwrap();
        assert_eq!(decode(&encode(&game).unwrap()).unwrap().snapshot(), game.snapshot());
    }

    #[test]
    fn test_truncated_bytes_rejected() {
        let bytes = encode(&mid_game()).unwrap();

        let result = decode(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(RestoreError::Codec(_))));
    }

    #[test]
    fn test_tampered_score_rejected() {
        let mut saved = SavedMatch::capture(&mid_game());
        saved.guesses[Player::One][0].score.correct_digits = 4;

        let result = saved.restore();
        assert!(matches!(
            result,
            Err(RestoreError::ScoreMismatch {
                player: Player::One,
                index: 0
            })
        ));
    }

    #[test]
    fn test_winner_while_guessing_rejected() {
        let mut saved = SavedMatch::capture(&mid_game());
        saved.winner = Some(Player::Two);

        assert!(matches!(saved.restore(), Err(RestoreError::Incoherent(_))));
    }

    #[test]
    fn test_guessing_without_secrets_rejected() {
        let mut saved = SavedMatch::capture(&mid_game());
        saved.secrets[Player::Two] = None;

        assert!(matches!(saved.restore(), Err(RestoreError::Incoherent(_))));
    }

    #[test]
    fn test_fake_winner_rejected() {
        let mut saved = SavedMatch::capture(&mid_game());
        // Claim the game ended without any exact guess on record.
        saved.phase = Phase::Over;
        saved.winner = Some(Player::One);

        assert!(matches!(saved.restore(), Err(RestoreError::Incoherent(_))));
    }

    #[test]
    fn test_guesses_during_setup_rejected() {
        let mut saved = SavedMatch::capture(&mid_game());
        saved.phase = Phase::SettingSecrets;
        saved.winner = None;
        saved.secrets = PlayerPair::with_value(None);

        assert!(matches!(saved.restore(), Err(RestoreError::Incoherent(_))));
    }
}
