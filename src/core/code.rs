//! Secret and guess codes.
//!
//! A `Code` is exactly four decimal digits, all distinct. It is used both
//! as a player's secret and as a guess. Every way of obtaining a `Code` —
//! `parse`, `FromStr`, serde — runs the same validation, so holding one
//! proves the invariant and the scorer never re-checks its inputs.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Number of digits in a code.
pub const CODE_LEN: usize = 4;

/// Why a submitted code was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidCodeError {
    #[error("expected exactly {CODE_LEN} characters, got {0}")]
    WrongLength(usize),
    #[error("'{0}' is not a decimal digit")]
    NotADigit(char),
    #[error("digit '{0}' appears more than once")]
    RepeatedDigit(char),
}

/// A 4-digit code with pairwise-distinct digits.
///
/// ## Example
///
/// ```
/// use digit_duel::Code;
///
/// let code = Code::parse("0192").unwrap();
/// assert_eq!(code.digits(), [0, 1, 9, 2]);
/// assert_eq!(code.to_string(), "0192");
///
/// assert!(Code::parse("1123").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code {
    digits: [u8; CODE_LEN],
}

impl Code {
    /// Parse and validate a code from user input.
    pub fn parse(input: &str) -> Result<Self, InvalidCodeError> {
        let chars: Vec<char> = input.chars().collect();
        if chars.len() != CODE_LEN {
            return Err(InvalidCodeError::WrongLength(chars.len()));
        }

        let mut digits = [0u8; CODE_LEN];
        for (i, &ch) in chars.iter().enumerate() {
            let digit = ch.to_digit(10).ok_or(InvalidCodeError::NotADigit(ch))? as u8;
            if digits[..i].contains(&digit) {
                return Err(InvalidCodeError::RepeatedDigit(ch));
            }
            digits[i] = digit;
        }

        Ok(Self { digits })
    }

    /// The digit values in order, each in `0..=9`.
    #[must_use]
    pub const fn digits(self) -> [u8; CODE_LEN] {
        self.digits
    }
}

impl FromStr for Code {
    type Err = InvalidCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Code {
    type Error = InvalidCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.to_string()
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_codes() {
        for input in ["0123", "9876", "1234", "5678", "0192"] {
            let code = Code::parse(input).unwrap();
            assert_eq!(code.to_string(), input);
        }
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(Code::parse("11"), Err(InvalidCodeError::WrongLength(2)));
        assert_eq!(Code::parse("12345"), Err(InvalidCodeError::WrongLength(5)));
        assert_eq!(Code::parse(""), Err(InvalidCodeError::WrongLength(0)));
    }

    #[test]
    fn test_rejects_non_digits() {
        assert_eq!(Code::parse("abcd"), Err(InvalidCodeError::NotADigit('a')));
        assert_eq!(Code::parse("12a4"), Err(InvalidCodeError::NotADigit('a')));
        // Non-ASCII digits are rejected too; to_digit only accepts '0'..='9'.
        assert_eq!(Code::parse("١٢٣٤"), Err(InvalidCodeError::NotADigit('١')));
    }

    #[test]
    fn test_rejects_repeated_digits() {
        assert_eq!(Code::parse("1123"), Err(InvalidCodeError::RepeatedDigit('1')));
        assert_eq!(Code::parse("1231"), Err(InvalidCodeError::RepeatedDigit('1')));
        assert_eq!(Code::parse("0000"), Err(InvalidCodeError::RepeatedDigit('0')));
    }

    #[test]
    fn test_from_str() {
        let code: Code = "4567".parse().unwrap();
        assert_eq!(code.digits(), [4, 5, 6, 7]);

        assert!("999".parse::<Code>().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let code = Code::parse("3097").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"3097\"");

        let deserialized: Code = serde_json::from_str(&json).unwrap();
        assert_eq!(code, deserialized);
    }

    #[test]
    fn test_serde_rejects_invalid_input() {
        assert!(serde_json::from_str::<Code>("\"1123\"").is_err());
        assert!(serde_json::from_str::<Code>("\"12345\"").is_err());
        assert!(serde_json::from_str::<Code>("\"abcd\"").is_err());
    }
}
