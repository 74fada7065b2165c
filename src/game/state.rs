//! The per-room match state machine.
//!
//! A `Match` owns everything one room needs: both secrets, both guess
//! histories, whose turn it is, and the last user-facing status message.
//! Transitions are synchronous and total: each validates its input, then
//! either mutates and returns `Ok`, or leaves the game state untouched
//! (refreshing only the message) and returns the rejection. Malformed
//! input can never corrupt a match.
//!
//! The caller is responsible for publishing the snapshot after every
//! transition; see `MatchSnapshot`.

use im::Vector;

use super::error::TurnError;
use super::phase::Phase;
use super::record::GuessRecord;
use super::snapshot::MatchSnapshot;
use crate::core::{Code, MatchConfig, Player, PlayerPair, Score};

const INVALID_SECRET_MESSAGE: &str =
    "Invalid number! Please enter a 4-digit number with no repeating digits.";
const INVALID_GUESS_MESSAGE: &str =
    "Invalid guess! Please enter a 4-digit number with no repeating digits.";

fn secret_prompt(player: Player) -> String {
    format!("{player}: Enter your secret 4-digit number (no repeating digits).")
}

fn guess_prompt(player: Player) -> String {
    format!("{}: Guess {}'s number!", player, player.opponent())
}

/// One player's side of the board.
#[derive(Clone, Debug, Default)]
pub(crate) struct Seat {
    pub(crate) secret: Option<Code>,
    pub(crate) guesses: Vector<GuessRecord>,
}

/// A two-player digit-guessing match.
///
/// Created in `Phase::SettingSecrets`; mutated exclusively through
/// `submit_secret`, `submit_guess`, `pass_turn`, and `restart`. Guess
/// histories use `im::Vector` so snapshots clone them in O(1).
#[derive(Clone, Debug)]
pub struct Match {
    config: MatchConfig,
    phase: Phase,
    current_player: Player,
    winner: Option<Player>,
    message: String,
    seats: PlayerPair<Seat>,
}

impl Match {
    /// Create a fresh match awaiting both secrets.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            phase: Phase::SettingSecrets,
            current_player: config.starting_player,
            winner: None,
            message: secret_prompt(Player::One),
            seats: PlayerPair::with_default(),
        }
    }

    // === Accessors ===

    /// The configuration this match was created with.
    #[must_use]
    pub fn config(&self) -> MatchConfig {
        self.config
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player expected to act next while guessing.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The winner, once the match is over.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Last user-facing status message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether a player has set their secret.
    #[must_use]
    pub fn secret_set(&self, player: Player) -> bool {
        self.seats[player].secret.is_some()
    }

    /// A player's guess history, in submission order.
    #[must_use]
    pub fn guesses(&self, player: Player) -> &Vector<GuessRecord> {
        &self.seats[player].guesses
    }

    pub(crate) fn secret(&self, player: Player) -> Option<Code> {
        self.seats[player].secret
    }

    /// Capture the observable state for publishing.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::capture(self)
    }

    // === Transitions ===

    /// Store a player's secret during setup.
    ///
    /// The first stored secret keeps the match in `SettingSecrets` and
    /// prompts the other player; the second moves it to `Guessing`.
    /// Re-submitting after the player's own secret is set is a silent
    /// no-op. Invalid codes and wrong-phase calls are rejected without
    /// touching either seat.
    pub fn submit_secret(&mut self, player: Player, code: &str) -> Result<(), TurnError> {
        match self.phase {
            Phase::SettingSecrets => {}
            Phase::Guessing => {
                self.message = "Secrets are already set. Guess your opponent's number!".to_string();
                return Err(TurnError::OutOfPhase);
            }
            Phase::Over => {
                self.message = "The game is over. Restart to play again!".to_string();
                return Err(TurnError::OutOfPhase);
            }
        }

        if self.seats[player].secret.is_some() {
            log::debug!("{player} re-submitted a secret; ignoring");
            return Ok(());
        }

        let code = match Code::parse(code) {
            Ok(code) => code,
            Err(err) => {
                self.message = INVALID_SECRET_MESSAGE.to_string();
                return Err(err.into());
            }
        };

        self.seats[player].secret = Some(code);
        if Player::both().all(|p| self.seats[p].secret.is_some()) {
            self.phase = Phase::Guessing;
            self.current_player = self.config.starting_player;
            self.message = guess_prompt(self.current_player);
            log::debug!("both secrets set; {} guesses first", self.current_player);
        } else {
            self.message = secret_prompt(player.opponent());
        }
        Ok(())
    }

    /// Score a guess by the current player against the opponent's secret.
    ///
    /// Four correct positions end the match; anything else flips the
    /// turn. The core does not care what the guessed code is beyond
    /// validity — players are free to guess their own digits.
    pub fn submit_guess(&mut self, player: Player, code: &str) -> Result<Score, TurnError> {
        match self.phase {
            Phase::Guessing => {}
            Phase::SettingSecrets => {
                self.message = "Both players must set their secret numbers first.".to_string();
                return Err(TurnError::OutOfPhase);
            }
            Phase::Over => {
                self.message = "The game is over. Restart to play again!".to_string();
                return Err(TurnError::OutOfPhase);
            }
        }

        if player != self.current_player {
            self.message = format!("Wait for your turn, {player}!");
            return Err(TurnError::NotYourTurn);
        }

        let guess = match Code::parse(code) {
            Ok(code) => code,
            Err(err) => {
                self.message = INVALID_GUESS_MESSAGE.to_string();
                return Err(err.into());
            }
        };

        let secret = self.seats[player.opponent()]
            .secret
            .expect("guessing phase requires both secrets");
        let score = Score::evaluate(secret, guess);
        self.seats[player]
            .guesses
            .push_back(GuessRecord::new(guess, score));

        if score.is_exact() {
            self.phase = Phase::Over;
            self.winner = Some(player);
            self.message = format!("{player} guessed the number {secret}!");
            log::info!(
                "{player} won after {} guesses",
                self.seats[player].guesses.len()
            );
        } else {
            self.current_player = player.opponent();
            self.message = format!(
                "{}: Guess {}'s number! Try a different number!",
                self.current_player, player
            );
            log::debug!("{player} guessed {guess}: {score}");
        }
        Ok(score)
    }

    /// Forfeit the current player's turn after an external timeout.
    ///
    /// Flips the turn without recording a guess; never a loss condition.
    /// Requiring `player` to be current means a timer that fires after
    /// the turn already advanced cannot skip the next player too.
    pub fn pass_turn(&mut self, player: Player) -> Result<(), TurnError> {
        if self.phase != Phase::Guessing {
            return Err(TurnError::OutOfPhase);
        }
        if player != self.current_player {
            return Err(TurnError::NotYourTurn);
        }

        self.current_player = player.opponent();
        self.message = format!("Time's up! {}", guess_prompt(self.current_player));
        log::debug!("{player} ran out of time; turn passes");
        Ok(())
    }

    /// Reset to a state indistinguishable from a fresh match with the
    /// same configuration. Valid from any phase; always succeeds.
    pub fn restart(&mut self) {
        log::info!("match restarted");
        *self = Match::new(self.config);
    }

    // Used by the store module to rebuild a validated match.
    pub(crate) fn from_parts(
        config: MatchConfig,
        phase: Phase,
        current_player: Player,
        winner: Option<Player>,
        message: String,
        seats: PlayerPair<Seat>,
    ) -> Self {
        Self {
            config,
            phase,
            current_player,
            winner,
            message,
            seats,
        }
    }
}
