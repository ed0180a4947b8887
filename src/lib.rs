//! Keypad-style calculator.
//!
//! [`calculator::CalculatorEngine`] is the event-driven core. The rest of the
//! crate is the terminal front end: key mapping, configuration and the
//! [`session::Session`] that ties them together.

pub mod calculator;
pub mod config;
pub mod input;
pub mod session;

pub use calculator::{CalcError, CalculatorEngine, Event, Operator};
pub use config::Config;
pub use session::{Outcome, Session};
