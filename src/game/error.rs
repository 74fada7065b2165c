//! Rejection reasons for match operations.

use thiserror::Error;

use crate::core::InvalidCodeError;

/// Why a transition was rejected.
///
/// Every variant is recoverable: the match keeps its prior game state
/// (only the user-facing message is refreshed) and the caller may retry
/// with corrected input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The submitted code failed validation.
    #[error(transparent)]
    InvalidCode(#[from] InvalidCodeError),

    /// The operation is not legal in the current phase.
    #[error("not allowed in the current phase")]
    OutOfPhase,

    /// A guess or pass was submitted by the non-current player.
    #[error("it is not your turn")]
    NotYourTurn,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_code_is_transparent() {
        let err = TurnError::from(InvalidCodeError::WrongLength(2));
        assert_eq!(err.to_string(), "expected exactly 4 characters, got 2");
    }
}
