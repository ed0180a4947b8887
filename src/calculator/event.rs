//! Discrete input events understood by the calculator engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value.
    ///
    /// Returns `None` if `value` is greater than 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Create a digit from an ASCII character.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// A binary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Parse an operator from a key character.
    ///
    /// Accepts the ASCII operators along with the aliases commonly printed
    /// on calculator keys (`x`, `×`, `÷`, `−`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// The ASCII symbol shown on the display while this operator is pending.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Typographic symbol for front ends that render unicode.
    pub fn unicode_symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Apply the operator using plain `f64` arithmetic.
    ///
    /// Division is true division; the caller rejects a zero divisor.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An input event delivered to [`CalculatorEngine::handle_event`].
///
/// [`CalculatorEngine::handle_event`]: super::CalculatorEngine::handle_event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Digit(Digit),
    DecimalPoint,
    Operator(Operator),
    Evaluate,
    Clear,
}

impl From<Digit> for Event {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Event {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_bounds() {
        assert_eq!(Digit::new(0).map(Digit::value), Some(0));
        assert_eq!(Digit::new(9).map(Digit::as_char), Some('9'));
        assert!(Digit::new(10).is_none());
        assert!(Digit::from_char('a').is_none());
        assert_eq!(Digit::from_char('7').map(Digit::value), Some(7));
    }

    #[test]
    fn test_operator_aliases() {
        assert_eq!(Operator::from_char('x'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('×'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('÷'), Some(Operator::Divide));
        assert_eq!(Operator::from_char('−'), Some(Operator::Subtract));
        assert_eq!(Operator::from_char('='), None);
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), -1.0);
        assert_eq!(Operator::Multiply.apply(2.5, 4.0), 10.0);
        assert_eq!(Operator::Divide.apply(7.0, 2.0), 3.5);
    }

    #[test]
    fn test_operator_symbols() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_char(op.symbol()), Some(op));
            assert_eq!(Operator::from_char(op.unicode_symbol()), Some(op));
        }
    }
}
