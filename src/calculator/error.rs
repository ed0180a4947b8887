//! Errors reported by the calculator engine.
//!
//! Every error is raised after the engine has already reset itself, so the
//! caller only needs to surface the message.

use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum CalcError {
    /// The operand text could not be parsed as a number.
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },

    /// Evaluation of `/` with a zero divisor.
    #[error("cannot divide by zero")]
    DivisionByZero,

    /// The arithmetic overflowed to infinity or produced NaN.
    #[error("result is not a finite number")]
    NonFiniteResult,
}

/// Machine-readable category of a [`CalcError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    DivisionByZero,
    NonFiniteResult,
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::NonFiniteResult => ErrorKind::NonFiniteResult,
        }
    }
}
