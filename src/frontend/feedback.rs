//! Press feedback around engine calls.
//!
//! The engine's transitions are pure; any press effect (the bell standing in
//! for a haptic pulse, a display flash) happens in an adapter the frontend
//! wraps around each key press. Dropping the adapter entirely changes
//! nothing about calculation behavior.

use std::io::{self, Write};

use crate::keypad::Key;

/// Receives notifications around each key press.
pub trait Feedback {
    /// A key was pressed, before it is applied to the engine.
    fn key_pressed(&mut self, key: Key);

    /// The display changed as a result of the press.
    fn display_changed(&mut self, display: &str);
}

/// Rings the terminal bell on every key press.
pub struct Bell;

impl Feedback for Bell {
    fn key_pressed(&mut self, _key: Key) {
        let mut stdout = io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }

    fn display_changed(&mut self, _display: &str) {}
}

/// Feedback that does nothing, for when the bell is disabled.
pub struct Silent;

impl Feedback for Silent {
    fn key_pressed(&mut self, _key: Key) {}

    fn display_changed(&mut self, _display: &str) {}
}
