//! What a front end renders after feeding a line of keys.

use crate::calculator::{CalcError, ErrorKind};
use serde::Serialize;

/// A reported engine error. The engine has already cleared itself.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&CalcError> for ErrorReport {
    fn from(err: &CalcError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// The state of the display after one line of input.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Outcome {
    /// The key line (or pasted text) that was applied.
    pub input: String,
    /// The engine display, exactly as the engine reports it.
    pub display: String,
    /// The display with the configured operator symbols.
    pub rendered: String,
    /// The most recent result computed by `=` while applying the line.
    pub result: Option<String>,
    /// Errors raised while applying the line, in order.
    pub errors: Vec<ErrorReport>,
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Text to put on the clipboard.
    /// The computed result when there is one, otherwise whatever is displayed.
    pub fn text_for_clipboard(&self) -> &str {
        self.result.as_deref().unwrap_or(&self.display)
    }
}
