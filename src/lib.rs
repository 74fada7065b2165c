//! # digit-duel
//!
//! A two-player digit-guessing ("Mastermind") match core for realtime
//! game rooms.
//!
//! Two players each set a secret 4-digit code with no repeating digits,
//! then alternate guessing the opponent's code. Each guess is scored as
//! correct-but-misplaced digits plus correctly-placed digits; four
//! correct positions win the match.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: scoring and turn transitions are synchronous,
//!    deterministic, and free of transport concerns. Collaborator layers
//!    (websockets, persistence, rendering) publish the snapshot returned
//!    by each transition.
//!
//! 2. **Validated at the boundary**: a `Code` can only be constructed
//!    through validation, including every serde path. Holding one proves
//!    the four-distinct-digits invariant, so the scorer never re-checks
//!    its inputs.
//!
//! 3. **One room, one lock**: each room's match is mutated under its own
//!    mutex; rooms never share mutable state and proceed fully in
//!    parallel.
//!
//! ## Modules
//!
//! - `core`: players, codes, scoring, configuration
//! - `game`: the match state machine and its snapshot
//! - `rooms`: room registry and per-room handles
//! - `store`: validated serialized form for collaborator persistence

pub mod core;
pub mod game;
pub mod rooms;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Code, InvalidCodeError, MatchConfig, Player, PlayerPair, Score, CODE_LEN};

pub use crate::game::{GuessRecord, Match, MatchSnapshot, Phase, TurnError};

pub use crate::rooms::{RoomHandle, RoomId, RoomRegistry};

pub use crate::store::{RestoreError, SavedMatch};
