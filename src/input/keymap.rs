//! Key mapping for the terminal front end.
//!
//! Turns a line of raw key presses into calculator events. A line is either
//! mapped completely or rejected, so a typo never applies half a line.

use crate::calculator::{Digit, Event, Operator};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Multi-letter key names, matched case-insensitively at the cursor.
    static ref NAMED_KEY: Regex = Regex::new(r"^(?i)(clear|enter|esc|ac)").unwrap();
}

/// Key bindings shown by `tapcalc keys`.
pub const BINDINGS: &[(&str, &str)] = &[
    ("0-9", "digit"),
    (". ,", "decimal point"),
    ("+", "add"),
    ("- −", "subtract"),
    ("* x ×", "multiply"),
    ("/ ÷", "divide"),
    ("= enter", "evaluate"),
    ("c clear esc ac", "clear"),
];

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("unknown key {key:?} at column {column}")]
    Unknown { key: char, column: usize },
}

/// Map a line of keys to events.
///
/// Whitespace is ignored, so `"12 + 3 ="` and `"12+3="` are equivalent.
pub fn parse_keys(line: &str) -> Result<Vec<Event>, KeyError> {
    let mut events = Vec::new();
    let mut pos = 0;

    while pos < line.len() {
        let rest = &line[pos..];

        if let Some(m) = NAMED_KEY.find(rest) {
            let event = match m.as_str().to_ascii_lowercase().as_str() {
                "enter" => Event::Evaluate,
                _ => Event::Clear,
            };
            events.push(event);
            pos += m.end();
            continue;
        }

        let Some(c) = rest.chars().next() else {
            break;
        };

        if let Some(event) = key_event(c) {
            events.push(event);
        } else if !c.is_whitespace() {
            return Err(KeyError::Unknown {
                key: c,
                column: line[..pos].chars().count() + 1,
            });
        }

        pos += c.len_utf8();
    }

    Ok(events)
}

/// Map a single key character to its event.
pub fn key_event(c: char) -> Option<Event> {
    if let Some(digit) = Digit::from_char(c) {
        return Some(Event::Digit(digit));
    }
    if let Some(op) = Operator::from_char(c) {
        return Some(Event::Operator(op));
    }

    match c {
        '.' | ',' => Some(Event::DecimalPoint),
        '=' => Some(Event::Evaluate),
        'c' | 'C' => Some(Event::Clear),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> Event {
        Event::Digit(Digit::new(d).unwrap())
    }

    #[test]
    fn test_simple_line() {
        let events = parse_keys("12+3=").unwrap();
        assert_eq!(
            events,
            vec![
                digit(1),
                digit(2),
                Event::Operator(Operator::Add),
                digit(3),
                Event::Evaluate,
            ]
        );
    }

    #[test]
    fn test_whitespace_ignored() {
        assert_eq!(parse_keys("12 + 3 =").unwrap(), parse_keys("12+3=").unwrap());
        assert!(parse_keys("   ").unwrap().is_empty());
        assert!(parse_keys("").unwrap().is_empty());
    }

    #[test]
    fn test_aliases() {
        assert_eq!(
            parse_keys("6x2").unwrap(),
            vec![digit(6), Event::Operator(Operator::Multiply), digit(2)]
        );
        assert_eq!(parse_keys("÷").unwrap(), vec![Event::Operator(Operator::Divide)]);
        assert_eq!(parse_keys("1,5").unwrap(), vec![digit(1), Event::DecimalPoint, digit(5)]);
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(parse_keys("Clear").unwrap(), vec![Event::Clear]);
        assert_eq!(parse_keys("ESC").unwrap(), vec![Event::Clear]);
        assert_eq!(parse_keys("AC").unwrap(), vec![Event::Clear]);
        assert_eq!(parse_keys("c").unwrap(), vec![Event::Clear]);
        assert_eq!(
            parse_keys("1+1 enter").unwrap(),
            vec![digit(1), Event::Operator(Operator::Add), digit(1), Event::Evaluate]
        );
    }

    #[test]
    fn test_unknown_key_rejects_line() {
        assert_eq!(
            parse_keys("12+q").unwrap_err(),
            KeyError::Unknown { key: 'q', column: 4 }
        );
        assert_eq!(
            parse_keys("×%").unwrap_err(),
            KeyError::Unknown { key: '%', column: 2 }
        );
    }
}
