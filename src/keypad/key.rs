//! The keypad's key set and its mapping from characters.

use thiserror::Error;

use crate::engine::{CalculatorState, Operator};

/// A single key on the calculator keypad.
///
/// This is the complete action set: nothing else reaches the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A digit key, `0..=9`.
    Digit(u8),
    /// The decimal point.
    Point,
    /// One of the four operator keys.
    Operator(Operator),
    /// The `=` key.
    Equals,
    /// The `AC` key.
    Clear,
    /// The `+/-` key.
    ToggleSign,
    /// The `%` key.
    Percent,
}

/// Error returned when a character does not name any keypad key.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("no keypad key for {0:?}")]
pub struct UnknownKey(pub char);

impl Key {
    /// Apply this key to a calculator state, producing the next state.
    pub fn apply(self, state: &CalculatorState) -> CalculatorState {
        match self {
            Self::Digit(digit) => state.enter_digit(digit),
            Self::Point => state.enter_point(),
            Self::Operator(operator) => state.choose_operator(operator),
            Self::Equals => state.equals(),
            Self::Clear => state.clear(),
            Self::ToggleSign => state.toggle_sign(),
            Self::Percent => state.percent(),
        }
    }
}

impl TryFrom<char> for Key {
    type Error = UnknownKey;

    /// Map a typed character to a key.
    ///
    /// Accepts the calculator glyphs (`×`, `÷`) as well as their common
    /// keyboard stand-ins (`*`, `x`, `X`, `/`). `c` clears, `s` toggles the
    /// sign.
    fn try_from(c: char) -> Result<Self, UnknownKey> {
        match c {
            '0'..='9' => Ok(Self::Digit(c as u8 - b'0')),
            '.' => Ok(Self::Point),
            '+' => Ok(Self::Operator(Operator::Add)),
            '-' => Ok(Self::Operator(Operator::Subtract)),
            '*' | '×' | 'x' | 'X' => Ok(Self::Operator(Operator::Multiply)),
            '/' | '÷' => Ok(Self::Operator(Operator::Divide)),
            '=' => Ok(Self::Equals),
            'c' | 'C' => Ok(Self::Clear),
            's' | 'S' | '±' => Ok(Self::ToggleSign),
            '%' => Ok(Self::Percent),
            other => Err(UnknownKey(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_mapping() {
        assert_eq!(Key::try_from('0'), Ok(Key::Digit(0)));
        assert_eq!(Key::try_from('9'), Ok(Key::Digit(9)));
    }

    #[test]
    fn test_operator_glyph_aliases() {
        for c in ['*', '×', 'x', 'X'] {
            assert_eq!(Key::try_from(c), Ok(Key::Operator(Operator::Multiply)));
        }
        for c in ['/', '÷'] {
            assert_eq!(Key::try_from(c), Ok(Key::Operator(Operator::Divide)));
        }
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(Key::try_from('='), Ok(Key::Equals));
        assert_eq!(Key::try_from('c'), Ok(Key::Clear));
        assert_eq!(Key::try_from('s'), Ok(Key::ToggleSign));
        assert_eq!(Key::try_from('%'), Ok(Key::Percent));
    }

    #[test]
    fn test_unknown_characters_are_errors() {
        assert_eq!(Key::try_from('q'), Err(UnknownKey('q')));
        assert_eq!(Key::try_from('#'), Err(UnknownKey('#')));
    }

    #[test]
    fn test_apply_dispatches_to_the_engine() {
        let state = Key::Digit(7).apply(&CalculatorState::new());
        let state = Key::Operator(Operator::Multiply).apply(&state);
        let state = Key::Digit(8).apply(&state);
        let state = Key::Equals.apply(&state);
        assert_eq!(state.display(), "56");
    }
}
