//! Raw key input handling.

mod keymap;

pub use keymap::{BINDINGS, KeyError, key_event, parse_keys};
