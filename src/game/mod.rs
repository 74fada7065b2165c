//! The match state machine: phases, records, rejections, snapshots.

pub mod error;
pub mod phase;
pub mod record;
pub mod snapshot;
pub mod state;

pub use error::TurnError;
pub use phase::Phase;
pub use record::GuessRecord;
pub use snapshot::MatchSnapshot;
pub use state::Match;
