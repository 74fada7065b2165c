//! Match lifecycle phases.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a match.
///
/// Phases advance `SettingSecrets -> Guessing -> Over`; `restart` returns
/// to `SettingSecrets` from anywhere. Rejected inputs never change the
/// phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for one or both secrets.
    SettingSecrets,
    /// Both secrets set; players alternate guesses.
    Guessing,
    /// A guess scored four correct positions.
    Over,
}
