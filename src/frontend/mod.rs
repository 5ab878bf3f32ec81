//! Presentation layer.
//!
//! Everything here is replaceable without touching calculation behavior: the
//! terminal keypad, the press-feedback hooks, and clipboard access all just
//! call into the engine and render its display.

mod clipboard;
mod feedback;
pub mod terminal;

pub use clipboard::copy_to_clipboard;
pub use feedback::{Bell, Feedback, Silent};
