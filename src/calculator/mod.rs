//! Calculator core.
//!
//! This module provides:
//! - The event types a front end feeds in
//! - The state machine that turns events into a display string
//! - Result formatting and operand parsing
//! - Copying results to the clipboard

mod clipboard;
mod engine;
mod error;
mod event;
mod format;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use engine::{CalculatorEngine, CalculatorState};
pub use error::{CalcError, ErrorKind};
pub use event::{Digit, Event, Operator};
pub use format::{normalize, parse_operand};
