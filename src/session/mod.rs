//! Presentation-side driver around the calculator engine.
//!
//! A [`Session`] owns the engine for the lifetime of a front end and applies
//! whole lines of keys to it, collecting what needs to be shown.

mod outcome;

pub use outcome::{ErrorReport, Outcome};

use crate::calculator::{CalculatorEngine, CalculatorState, Event, Operator};
use crate::config::{Config, SymbolStyle};
use crate::input::{KeyError, parse_keys};
use tracing::debug;

pub struct Session {
    engine: CalculatorEngine,
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn display(&self) -> &str {
        self.engine.current_display()
    }

    /// The engine state, for inspection and JSON dumps.
    pub fn snapshot(&self) -> &CalculatorState {
        self.engine.state()
    }

    /// Apply a line of keys.
    ///
    /// The line is mapped up front; an unknown key rejects it without touching
    /// the engine. Engine errors do not stop the line: they are recorded and
    /// the remaining keys apply to the cleared engine.
    pub fn feed(&mut self, keys: &str) -> Result<Outcome, KeyError> {
        let events = parse_keys(keys)?;
        debug!(keys, count = events.len(), "feeding key line");

        let mut result = None;
        let mut errors = Vec::new();

        for event in events {
            let computes = event == Event::Evaluate && self.engine.has_pending_operation();
            match self.engine.handle_event(event) {
                Ok(()) if computes => result = Some(self.engine.current_display().to_string()),
                Ok(()) => {}
                Err(err) => errors.push(ErrorReport::from(&err)),
            }
        }

        Ok(self.outcome(keys, result, errors))
    }

    /// Replace the operand being typed with pasted text.
    pub fn paste(&mut self, text: &str) -> Outcome {
        let text = text.trim();
        self.engine.set_input(text);
        self.outcome(text, None, Vec::new())
    }

    /// The display as the user should see it.
    pub fn rendered_display(&self) -> String {
        render(self.display(), self.config.symbols)
    }

    fn outcome(&self, input: &str, result: Option<String>, errors: Vec<ErrorReport>) -> Outcome {
        Outcome {
            input: input.to_string(),
            display: self.display().to_string(),
            rendered: self.rendered_display(),
            result,
            errors,
        }
    }
}

fn render(display: &str, style: SymbolStyle) -> String {
    if style == SymbolStyle::Unicode {
        let mut chars = display.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(op) = Operator::from_char(c)
        {
            return op.unicode_symbol().to_string();
        }
    }
    display.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::ErrorKind;

    fn session() -> Session {
        Session::new(Config::default())
    }

    #[test]
    fn test_feed_line() {
        let mut session = session();
        let out = session.feed("12 + 30 =").unwrap();
        assert_eq!(out.display, "42");
        assert_eq!(out.result.as_deref(), Some("42"));
        assert!(!out.is_error());
    }

    #[test]
    fn test_state_persists_across_lines() {
        let mut session = session();
        assert_eq!(session.feed("2+3=").unwrap().display, "5");
        assert_eq!(session.feed("*").unwrap().display, "*");
        let out = session.feed("4=").unwrap();
        assert_eq!(out.display, "20");
        assert_eq!(out.result.as_deref(), Some("20"));
    }

    #[test]
    fn test_no_result_without_evaluation() {
        let mut session = session();
        let out = session.feed("7/").unwrap();
        assert_eq!(out.result, None);
        // Inert "=" does not produce a result either.
        let out = session.feed("=").unwrap();
        assert_eq!(out.result, None);
        assert_eq!(out.display, "/");
    }

    #[test]
    fn test_errors_are_collected_and_line_continues() {
        let mut session = session();
        let out = session.feed("5/0= 8-3=").unwrap();
        assert_eq!(out.errors.len(), 1);
        assert_eq!(out.errors[0].kind, ErrorKind::DivisionByZero);
        assert_eq!(out.display, "5");
        assert_eq!(out.result.as_deref(), Some("5"));
    }

    #[test]
    fn test_error_leaves_display_cleared() {
        let mut session = session();
        let out = session.feed("5/0=").unwrap();
        assert!(out.is_error());
        assert_eq!(out.display, "0");
        assert_eq!(session.snapshot(), &CalculatorState::default());
    }

    #[test]
    fn test_unknown_key_leaves_engine_untouched() {
        let mut session = session();
        session.feed("12+").unwrap();
        let before = session.snapshot().clone();
        assert!(session.feed("3?=").is_err());
        assert_eq!(session.snapshot(), &before);
    }

    #[test]
    fn test_paste() {
        let mut session = session();
        session.feed("10*").unwrap();
        let out = session.paste(" 2.5\n");
        assert_eq!(out.display, "2.5");
        assert_eq!(session.feed("=").unwrap().display, "25");
    }

    #[test]
    fn test_paste_garbage_reports_invalid_input() {
        let mut session = session();
        session.paste("12abc");
        let out = session.feed("+").unwrap();
        assert_eq!(out.errors[0].kind, ErrorKind::InvalidInput);
        assert_eq!(out.display, "0");
        assert_eq!(session.snapshot(), &CalculatorState::default());
    }

    #[test]
    fn test_unicode_rendering() {
        let config = Config {
            symbols: SymbolStyle::Unicode,
            ..Config::default()
        };
        let mut session = Session::new(config);
        let out = session.feed("6*").unwrap();
        assert_eq!(out.display, "*");
        assert_eq!(out.rendered, "×");
        let out = session.feed("-").unwrap();
        assert_eq!(out.rendered, "−");
        // Negative numbers keep their ASCII sign.
        let out = session.feed("8=").unwrap();
        assert_eq!(out.rendered, "-2");
    }

    #[test]
    fn test_ascii_rendering() {
        let mut session = session();
        assert_eq!(session.feed("6/").unwrap().rendered, "/");
    }
}
