//! The calculator state machine.
//!
//! A session is a sequence of immutable [`CalculatorState`] values: every
//! keypad action takes the current state and returns the next one. The
//! presentation layer only ever reads [`CalculatorState::display`] back after
//! each action.

use super::format::format_number;
use super::operator::Operator;

/// The full state of a calculator session.
///
/// Invariants:
/// - `operator` and `first_operand` are set and cleared together;
/// - `display` always parses as a finite number, except transiently while a
///   number is being typed (a trailing `.`);
/// - `awaiting_second_operand` is true only between an operator press and the
///   next digit or point entry.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    display: String,
    operator: Option<Operator>,
    first_operand: Option<f64>,
    awaiting_second_operand: bool,
}

impl CalculatorState {
    /// The state a fresh session starts in: a bare `"0"`, nothing pending.
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            operator: None,
            first_operand: None,
            awaiting_second_operand: false,
        }
    }

    /// The string currently on the display.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The operator chosen but not yet applied, if any.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Numeric value of the display. Total: the display is only ever written
    /// by the transitions below, which keep it parseable (a transient
    /// trailing `.` still parses).
    fn value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    /// Enter a digit (`0..=9`).
    ///
    /// After an operator press the digit replaces the display and starts the
    /// second operand; otherwise it appends, except that a bare `"0"` is
    /// replaced rather than extended (no `"07"`).
    pub fn enter_digit(&self, digit: u8) -> Self {
        debug_assert!(digit <= 9, "digit out of range: {digit}");
        let glyph = char::from(b'0' + digit);

        if self.awaiting_second_operand {
            return Self {
                display: glyph.to_string(),
                awaiting_second_operand: false,
                ..self.clone()
            };
        }

        let display = if self.display == "0" {
            glyph.to_string()
        } else {
            format!("{}{glyph}", self.display)
        };
        Self {
            display,
            ..self.clone()
        }
    }

    /// Enter the decimal point.
    ///
    /// A display that already has a point is left untouched. After an
    /// operator press the second operand starts as `"0."` so the display
    /// stays parseable.
    pub fn enter_point(&self) -> Self {
        if self.awaiting_second_operand {
            return Self {
                display: "0.".to_string(),
                awaiting_second_operand: false,
                ..self.clone()
            };
        }

        if self.display.contains('.') {
            return self.clone();
        }
        Self {
            display: format!("{}.", self.display),
            ..self.clone()
        }
    }

    /// Choose the pending binary operator, capturing the display as the
    /// first operand. Pressing several operators in a row just overwrites
    /// the pending one — last operator wins, there is no chaining.
    pub fn choose_operator(&self, operator: Operator) -> Self {
        Self {
            display: self.display.clone(),
            operator: Some(operator),
            first_operand: Some(self.value()),
            awaiting_second_operand: true,
        }
    }

    /// Apply the pending operator to the stored operand and the display.
    ///
    /// Without a pending operator this is a no-op. The result is formatted
    /// for the display and the pending state is cleared.
    pub fn equals(&self) -> Self {
        let (Some(operator), Some(first)) = (self.operator, self.first_operand) else {
            return self.clone();
        };

        let result = operator.apply(first, self.value());
        Self {
            display: format_number(result),
            operator: None,
            first_operand: None,
            awaiting_second_operand: false,
        }
    }

    /// Reset to the initial state.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Negate the display. The pending operator and operand are untouched.
    pub fn toggle_sign(&self) -> Self {
        Self {
            display: format_number(-self.value()),
            ..self.clone()
        }
    }

    /// Divide the display by 100. The pending operator and operand are
    /// untouched.
    pub fn percent(&self) -> Self {
        Self {
            display: format_number(self.value() / 100.0),
            ..self.clone()
        }
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}
