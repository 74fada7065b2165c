//! Recorded guesses.

use serde::{Deserialize, Serialize};

use crate::core::{Code, Score};

/// One guess and its score, immutable once appended.
///
/// Per-player histories keep insertion order; clients render them as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// The guessed code.
    pub guess: Code,

    /// Its evaluation against the opponent's secret.
    pub score: Score,
}

impl GuessRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(guess: Code, score: Score) -> Self {
        Self { guess, score }
    }
}
