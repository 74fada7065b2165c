//! Guess evaluation.
//!
//! Bulls-and-cows scoring: `correct_positions` counts digits matching in
//! both value and position, `correct_digits` counts digits present in both
//! codes but misplaced. The counts are disjoint — a digit consumed by a
//! positional match never also counts as misplaced — so
//! `correct_positions + correct_digits <= 4` holds by construction.

use serde::{Deserialize, Serialize};

use super::code::{Code, CODE_LEN};

/// Outcome of comparing a guess against a secret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    /// Digits present in the secret but in a different position ("cows").
    pub correct_digits: u8,

    /// Digits matching in both value and position ("bulls").
    pub correct_positions: u8,
}

impl Score {
    /// Compare `guess` against `secret`.
    ///
    /// Positionally-matched pairs are consumed first; each remaining guess
    /// digit may then consume at most one remaining secret digit. Pure and
    /// deterministic.
    ///
    /// ```
    /// use digit_duel::{Code, Score};
    ///
    /// let secret = Code::parse("1234").unwrap();
    /// let guess = Code::parse("1243").unwrap();
    ///
    /// let score = Score::evaluate(secret, guess);
    /// assert_eq!(score.correct_positions, 2);
    /// assert_eq!(score.correct_digits, 2);
    /// ```
    #[must_use]
    pub fn evaluate(secret: Code, guess: Code) -> Self {
        let secret = secret.digits();
        let guess = guess.digits();

        let mut secret_used = [false; CODE_LEN];
        let mut guess_used = [false; CODE_LEN];

        let mut correct_positions = 0;
        for i in 0..CODE_LEN {
            if secret[i] == guess[i] {
                correct_positions += 1;
                secret_used[i] = true;
                guess_used[i] = true;
            }
        }

        let mut correct_digits = 0;
        for i in 0..CODE_LEN {
            if guess_used[i] {
                continue;
            }
            for j in 0..CODE_LEN {
                if !secret_used[j] && secret[j] == guess[i] {
                    correct_digits += 1;
                    secret_used[j] = true;
                    break;
                }
            }
        }

        Self {
            correct_digits,
            correct_positions,
        }
    }

    /// Whether the guess hit the secret exactly.
    #[must_use]
    pub const fn is_exact(self) -> bool {
        self.correct_positions as usize == CODE_LEN
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} correct digits, {} correct positions",
            self.correct_digits, self.correct_positions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn code_from_digits(digits: &[u8]) -> Code {
        let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        Code::parse(&text).unwrap()
    }

    fn valid_code() -> impl Strategy<Value = Code> {
        Just((0u8..10).collect::<Vec<u8>>())
            .prop_shuffle()
            .prop_map(|digits| code_from_digits(&digits[..CODE_LEN]))
    }

    #[test]
    fn test_partial_position_match() {
        let secret = Code::parse("1234").unwrap();
        let guess = Code::parse("1243").unwrap();

        let score = Score::evaluate(secret, guess);
        assert_eq!(score.correct_positions, 2);
        assert_eq!(score.correct_digits, 2);
    }

    #[test]
    fn test_all_digits_misplaced() {
        let secret = Code::parse("0192").unwrap();
        let guess = Code::parse("9021").unwrap();

        let score = Score::evaluate(secret, guess);
        assert_eq!(score.correct_positions, 0);
        assert_eq!(score.correct_digits, 4);
    }

    #[test]
    fn test_no_overlap() {
        let secret = Code::parse("1234").unwrap();
        let guess = Code::parse("5678").unwrap();

        let score = Score::evaluate(secret, guess);
        assert_eq!(score.correct_positions, 0);
        assert_eq!(score.correct_digits, 0);
    }

    /// Positionally-matched digits must not also count as misplaced.
    /// A tally over raw digit multisets would report 4 correct digits here.
    #[test]
    fn test_positional_matches_are_not_double_counted() {
        let secret = Code::parse("1234").unwrap();
        let guess = Code::parse("1243").unwrap();

        assert_eq!(Score::evaluate(secret, guess).correct_digits, 2);
    }

    #[test]
    fn test_exact_match() {
        let secret = Code::parse("5678").unwrap();

        let score = Score::evaluate(secret, secret);
        assert_eq!(score.correct_positions, 4);
        assert_eq!(score.correct_digits, 0);
        assert!(score.is_exact());
    }

    #[test]
    fn test_serde_round_trip() {
        let score = Score {
            correct_digits: 2,
            correct_positions: 1,
        };
        let json = serde_json::to_string(&score).unwrap();
        let deserialized: Score = serde_json::from_str(&json).unwrap();
        assert_eq!(score, deserialized);
    }

    proptest! {
        #[test]
        fn counts_are_disjoint_and_bounded(secret in valid_code(), guess in valid_code()) {
            let score = Score::evaluate(secret, guess);
            prop_assert!(score.correct_positions <= 4);
            prop_assert!(score.correct_digits <= 4 - score.correct_positions);
        }

        #[test]
        fn guessing_the_secret_is_exact(secret in valid_code()) {
            let score = Score::evaluate(secret, secret);
            prop_assert_eq!(score.correct_positions, 4);
            prop_assert_eq!(score.correct_digits, 0);
        }

        /// Rotating distinct digits leaves no fixed points, so every digit
        /// is present but misplaced.
        #[test]
        fn rotated_secret_scores_four_misplaced(secret in valid_code()) {
            let d = secret.digits();
            let rotated = code_from_digits(&[d[1], d[2], d[3], d[0]]);

            let score = Score::evaluate(secret, rotated);
            prop_assert_eq!(score.correct_positions, 0);
            prop_assert_eq!(score.correct_digits, 4);
        }

        #[test]
        fn evaluation_is_deterministic(secret in valid_code(), guess in valid_code()) {
            prop_assert_eq!(Score::evaluate(secret, guess), Score::evaluate(secret, guess));
        }
    }
}
