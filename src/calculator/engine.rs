//! The keypad state machine.
//!
//! The engine accumulates the operand being typed as text and only parses it
//! when an operator or `=` needs the value. At most one binary operation is
//! pending at a time and evaluation is strictly left to right.

use super::format::{normalize, parse_operand};
use super::{CalcError, Digit, Event, Operator};
use serde::Serialize;
use tracing::{debug, info};

/// All mutable state of the calculator.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculatorState {
    /// Text of the operand being typed. Empty until the first key of it.
    pub current_input: String,
    /// Left-hand operand of the pending operation, or the last result.
    pub first_operand: Option<f64>,
    /// Operator waiting for its right-hand operand.
    pub operator: Option<Operator>,
    /// Text currently shown to the user.
    pub display_text: String,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_input: String::new(),
            first_operand: None,
            operator: None,
            display_text: "0".to_string(),
        }
    }
}

/// Event-driven calculator.
///
/// Feed it [`Event`]s with [`handle_event`](Self::handle_event) and read the
/// result back with [`current_display`](Self::current_display). Errors are
/// returned from `handle_event` after the engine has reset itself to the
/// cleared state.
#[derive(Clone, Debug, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one event.
    pub fn handle_event(&mut self, event: Event) -> Result<(), CalcError> {
        let outcome = match event {
            Event::Clear => {
                self.clear();
                Ok(())
            }
            Event::Digit(digit) => {
                self.push_digit(digit);
                Ok(())
            }
            Event::DecimalPoint => {
                self.push_decimal_point();
                Ok(())
            }
            Event::Operator(op) => self.select_operator(op),
            Event::Evaluate => self.evaluate(),
        };

        if let Err(err) = &outcome {
            info!(?event, %err, "calculator error, clearing");
            self.clear();
        }

        debug!(?event, display = %self.state.display_text, "handled event");
        outcome
    }

    /// The text the presentation layer should show.
    pub fn current_display(&self) -> &str {
        &self.state.display_text
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Whether an `=` would compute a result right now.
    pub fn has_pending_operation(&self) -> bool {
        self.state.first_operand.is_some()
            && self.state.operator.is_some()
            && !self.state.current_input.is_empty()
    }

    /// Replace the operand being typed with arbitrary text.
    ///
    /// This bypasses key validation; it is the entry point for pasted text.
    /// The display echoes the text verbatim, so malformed text such as
    /// `"1.2.3"` is the one way the display can hold more than one decimal
    /// point. Text that is not a number is reported as
    /// [`CalcError::InvalidInput`] once an operator or `=` tries to use it,
    /// which clears the display again.
    pub fn set_input(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.state.current_input = text.to_string();
        self.state.display_text = text.to_string();
    }

    fn clear(&mut self) {
        self.state = CalculatorState::default();
    }

    fn push_digit(&mut self, digit: Digit) {
        self.state.current_input.push(digit.as_char());
        self.state.display_text = self.state.current_input.clone();
    }

    fn push_decimal_point(&mut self) {
        let input = &mut self.state.current_input;
        if input.is_empty() {
            input.push_str("0.");
        } else if input.contains('.') {
            return;
        } else {
            input.push('.');
        }
        self.state.display_text = input.clone();
    }

    fn select_operator(&mut self, op: Operator) -> Result<(), CalcError> {
        let state = &mut self.state;

        if state.first_operand.is_some() && state.current_input.is_empty() {
            // Replaces a pending operator, or starts a new operation on the
            // previous result.
            state.operator = Some(op);
        } else if state.first_operand.is_none() && !state.current_input.is_empty() {
            let value = parse_operand(&state.current_input)?;
            state.first_operand = Some(value);
            state.operator = Some(op);
            state.current_input.clear();
        } else {
            return Ok(());
        }

        state.display_text = op.symbol().to_string();
        Ok(())
    }

    fn evaluate(&mut self) -> Result<(), CalcError> {
        if !self.has_pending_operation() {
            return Ok(());
        }
        let state = &mut self.state;
        let (Some(lhs), Some(op)) = (state.first_operand, state.operator) else {
            return Ok(());
        };

        let rhs = parse_operand(&state.current_input)?;
        if op == Operator::Divide && rhs == 0.0 {
            return Err(CalcError::DivisionByZero);
        }

        let result = op.apply(lhs, rhs);
        state.display_text = normalize(result)?;
        state.first_operand = Some(result);
        state.operator = None;
        state.current_input.clear();
        Ok(())
    }
}
