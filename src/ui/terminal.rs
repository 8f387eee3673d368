//! Terminal setup and crossterm event conversion.

use crate::input::{Key, KeyInput, Modifiers};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode,
    KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind, read,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::{self, stdout};
use tracing::debug;

/// Puts the terminal into raw alternate-screen mode and restores it on drop.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // Constructed before the remaining setup so a failure still restores raw mode.
        let guard = Self;
        execute!(stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)?;
        debug!("terminal entered raw mode");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        debug!("terminal restored");
    }
}

/// Terminal events the calculator cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyInput),
    /// Left mouse button pressed at (column, row).
    Tap { x: u16, y: u16 },
    Resize,
    None,
}

/// Block until the next terminal event.
pub fn read_event() -> io::Result<InputEvent> {
    Ok(convert_event(read()?))
}

pub fn convert_event(event: CrosstermEvent) -> InputEvent {
    match event {
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
            InputEvent::Key(convert_key_event(key))
        }
        CrosstermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => InputEvent::Tap {
                x: mouse.column,
                y: mouse.row,
            },
            _ => InputEvent::None,
        },
        CrosstermEvent::Resize(_, _) => InputEvent::Resize,
        _ => InputEvent::None,
    }
}

/// Convert a crossterm key event into a backend-independent key press.
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyInput {
    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Esc => Key::Escape,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::F(n) => Key::F(n),
        _ => Key::Other,
    };

    KeyInput {
        key,
        modifiers: Modifiers {
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        },
    }
}
