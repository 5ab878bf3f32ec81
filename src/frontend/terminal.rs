//! Interactive terminal keypad.
//!
//! A raw-mode loop: each key event maps to a keypad key, the engine produces
//! the next state, and the display line is redrawn. The display renders
//! right-aligned with the pending operator shown on the left, the way a
//! calculator screen keeps the operator indicator in the corner.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveToColumn,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{self, Clear, ClearType},
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::engine::CalculatorState;
use crate::keypad::Key;

use super::clipboard::copy_to_clipboard;
use super::feedback::{Bell, Feedback, Silent};

/// Width the display value is right-aligned into.
const DISPLAY_WIDTH: usize = 14;

/// Run the interactive keypad until the user quits.
pub fn run(config: &Config) -> Result<()> {
    let mut stdout = io::stdout();
    writeln!(
        stdout,
        "keycalc — 0-9 . + - * / = (or Enter) | c clear, s sign, % percent, y copy, q quit"
    )?;

    terminal::enable_raw_mode().context("failed to enable raw terminal mode")?;
    let result = event_loop(config, &mut stdout);
    terminal::disable_raw_mode().context("failed to restore terminal mode")?;
    writeln!(stdout)?;
    result
}

fn event_loop(config: &Config, stdout: &mut io::Stdout) -> Result<()> {
    let mut feedback: Box<dyn Feedback> = if config.feedback.bell {
        Box::new(Bell)
    } else {
        Box::new(Silent)
    };

    let mut state = CalculatorState::new();
    let mut status = "";
    redraw(stdout, &state, status)?;

    loop {
        let Event::Key(key_event) = event::read().context("failed to read key event")? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        let key = match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => break,
            KeyCode::Enter => Some(Key::Equals),
            KeyCode::Char('y') => {
                match copy_to_clipboard(state.display()) {
                    Ok(()) => status = "copied",
                    Err(error) => {
                        warn!(%error, "clipboard copy failed");
                        status = "copy failed";
                    }
                }
                redraw(stdout, &state, status)?;
                None
            }
            // Unknown characters are ignored: the keypad has no error state.
            KeyCode::Char(c) => Key::try_from(c).ok(),
            _ => None,
        };

        if let Some(key) = key {
            feedback.key_pressed(key);
            state = key.apply(&state);
            feedback.display_changed(state.display());
            debug!(?key, display = state.display(), "applied key");
            status = "";
            redraw(stdout, &state, status)?;
        }
    }

    Ok(())
}

/// Redraw the display line in place.
fn redraw(stdout: &mut io::Stdout, state: &CalculatorState, status: &str) -> Result<()> {
    execute!(stdout, MoveToColumn(0), Clear(ClearType::CurrentLine))?;

    let indicator = state
        .pending_operator()
        .map_or(' ', |operator| operator.symbol());
    let width = DISPLAY_WIDTH;
    write!(stdout, "[{indicator}] {:>width$}  {status}", state.display())?;
    stdout.flush()?;
    Ok(())
}
