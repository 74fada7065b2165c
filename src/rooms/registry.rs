//! Room registry: per-room match ownership.
//!
//! Each room owns exactly one match behind its own mutex, so exactly one
//! transition applies at a time per room while distinct rooms proceed
//! fully in parallel. The registry map itself is locked only long enough
//! to look up or insert a room, never across a transition.

use std::sync::{Arc, Mutex, PoisonError};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{MatchConfig, Player};
use crate::game::{Match, MatchSnapshot, TurnError};

/// Opaque room identifier issued by the collaborator layer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    /// Create a room identifier from any token.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registry of live matches, one per room.
///
/// ## Example
///
/// ```
/// use digit_duel::{Phase, Player, RoomId, RoomRegistry};
///
/// let registry = RoomRegistry::default();
/// let room = registry.join(&RoomId::new("lobby-7"));
///
/// let snapshot = room.submit_secret(Player::One, "1234").unwrap();
/// assert_eq!(snapshot.phase, Phase::SettingSecrets);
/// ```
pub struct RoomRegistry {
    config: MatchConfig,
    rooms: Mutex<FxHashMap<RoomId, Arc<Mutex<Match>>>>,
}

impl RoomRegistry {
    /// Create a registry whose rooms start matches with `config`.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            rooms: Mutex::new(FxHashMap::default()),
        }
    }

    /// Get a room, creating a fresh match on first access.
    pub fn join(&self, id: &RoomId) -> RoomHandle {
        let mut rooms = self.rooms.lock().unwrap_or_else(PoisonError::into_inner);
        let game = match rooms.get(id) {
            Some(game) => Arc::clone(game),
            None => {
                log::debug!("room {id} created");
                let game = Arc::new(Mutex::new(Match::new(self.config)));
                rooms.insert(id.clone(), Arc::clone(&game));
                game
            }
        };
        RoomHandle {
            id: id.clone(),
            game,
        }
    }

    /// Look up an existing room without creating one.
    ///
    /// A missing room is the collaborator layer's concern; the core
    /// simply reports it.
    #[must_use]
    pub fn room(&self, id: &RoomId) -> Option<RoomHandle> {
        let rooms = self.rooms.lock().unwrap_or_else(PoisonError::into_inner);
        rooms.get(id).map(|game| RoomHandle {
            id: id.clone(),
            game: Arc::clone(game),
        })
    }

    /// Drop a room. Returns whether it existed.
    ///
    /// Handles already held for the room keep working; the match is freed
    /// once the last one goes away.
    pub fn remove(&self, id: &RoomId) -> bool {
        let mut rooms = self.rooms.lock().unwrap_or_else(PoisonError::into_inner);
        let existed = rooms.remove(id).is_some();
        if existed {
            log::debug!("room {id} removed");
        }
        existed
    }

    /// Number of live rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no rooms are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

/// A claim on one room's match.
///
/// Methods lock the match for exactly one transition and return the
/// snapshot to publish; holding a handle does not hold the lock. On a
/// rejection the caller may still call `snapshot()` to publish the
/// refreshed status message.
#[derive(Clone)]
pub struct RoomHandle {
    id: RoomId,
    game: Arc<Mutex<Match>>,
}

impl RoomHandle {
    /// The room this handle belongs to.
    #[must_use]
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    // Transitions never panic mid-mutation, so a poisoned lock still
    // holds a valid match and can be recovered.
    fn with<T>(&self, f: impl FnOnce(&mut Match) -> T) -> T {
        let mut game = self.game.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut game)
    }

    /// Read the current observable state.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        self.with(|game| game.snapshot())
    }

    /// Store a player's secret. See `Match::submit_secret`.
    pub fn submit_secret(
        &self,
        player: Player,
        code: &str,
    ) -> Result<MatchSnapshot, TurnError> {
        self.with(|game| {
            game.submit_secret(player, code)?;
            Ok(game.snapshot())
        })
    }

    /// Score a guess for the current player. See `Match::submit_guess`.
    pub fn submit_guess(
        &self,
        player: Player,
        code: &str,
    ) -> Result<MatchSnapshot, TurnError> {
        self.with(|game| {
            game.submit_guess(player, code)?;
            Ok(game.snapshot())
        })
    }

    /// Forfeit the current player's turn after an external timeout.
    pub fn pass_turn(&self, player: Player) -> Result<MatchSnapshot, TurnError> {
        self.with(|game| {
            game.pass_turn(player)?;
            Ok(game.snapshot())
        })
    }

    /// Reset the room's match. Valid from any phase.
    pub fn restart(&self) -> MatchSnapshot {
        self.with(|game| {
            game.restart();
            game.snapshot()
        })
    }
}
