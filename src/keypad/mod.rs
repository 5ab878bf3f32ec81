//! Keypad input boundary.
//!
//! This module provides functionality to:
//! - Name every key on the keypad ([`Key`]) and dispatch it onto the engine
//! - Map typed characters to keys, including glyph aliases
//! - Parse whole key sequences for the non-interactive mode

mod key;
mod sequence;

pub use key::{Key, UnknownKey};
pub use sequence::{SequenceError, parse_sequence};
