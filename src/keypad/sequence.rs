//! Parsing of whole key sequences.
//!
//! Turns a line such as `"7 x 8 ="` into keypad keys. Used by the
//! non-interactive frontend mode, where a full sequence arrives at once
//! instead of one key event at a time.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::key::{Key, UnknownKey};

lazy_static! {
    /// Matches strings containing only characters that can appear on the
    /// keypad (plus whitespace between keys).
    static ref KEYPAD_SAFE_CHARS: Regex = Regex::new(
        r"^[\d\s\.\+\-\*/%×÷xXcCsS±=]+$"
    ).unwrap();
}

/// Error returned for input that is not a key sequence.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    /// The input contains characters outside the keypad alphabet.
    #[error("input contains characters that are not keypad keys")]
    NotKeypadInput,
    /// A character passed the pre-check but names no key.
    #[error(transparent)]
    UnknownKey(#[from] UnknownKey),
}

/// Parse a key sequence.
///
/// Whitespace separates keys and is ignored; an empty input is an empty
/// sequence. The character pre-check is a fast reject for input that was
/// never meant for the keypad.
pub fn parse_sequence(input: &str) -> Result<Vec<Key>, SequenceError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if !KEYPAD_SAFE_CHARS.is_match(trimmed) {
        return Err(SequenceError::NotKeypadInput);
    }

    trimmed
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Key::try_from(c).map_err(SequenceError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Operator;

    #[test]
    fn test_sequence_with_spaces() {
        let keys = parse_sequence("7 x 8 =").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit(7),
                Key::Operator(Operator::Multiply),
                Key::Digit(8),
                Key::Equals,
            ]
        );
    }

    #[test]
    fn test_sequence_without_spaces() {
        let keys = parse_sequence("50%").unwrap();
        assert_eq!(keys, vec![Key::Digit(5), Key::Digit(0), Key::Percent]);
    }

    #[test]
    fn test_calculator_glyphs_parse() {
        let keys = parse_sequence("9 ÷ 2 =").unwrap();
        assert_eq!(keys[1], Key::Operator(Operator::Divide));
    }

    #[test]
    fn test_empty_input_is_an_empty_sequence() {
        assert_eq!(parse_sequence(""), Ok(Vec::new()));
        assert_eq!(parse_sequence("   "), Ok(Vec::new()));
    }

    #[test]
    fn test_non_keypad_input_is_rejected() {
        assert_eq!(
            parse_sequence("hello world"),
            Err(SequenceError::NotKeypadInput)
        );
        assert_eq!(parse_sequence("2 & 2"), Err(SequenceError::NotKeypadInput));
    }
}
