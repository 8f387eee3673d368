//! Input dispatch.
//!
//! Every key press, keypad tap and menu selection resolves to a [`Command`].
//! The tables here are pure so they can be tested without a terminal.

pub mod keypad;

pub use keypad::Button;

use crate::calculator::Operator;

/// One discrete action the calculator screen can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Digit(u8),
    Point,
    Operator(Operator),
    Evaluate,
    Clear,
    Backspace,
    OpenMenu,
    Exit,
}

/// A key, independent of the terminal backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Escape,
    Up,
    Down,
    F(u8),
    Other,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

/// A key-down event with its modifier state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
}

#[cfg(test)]
impl KeyInput {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        }
    }

    pub fn shift(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                shift: true,
                ..Modifiers::default()
            },
        }
    }
}

/// Map a key press on the main screen to a command.
///
/// Returns `None` for keys the calculator does not handle.
pub fn route_key(input: KeyInput) -> Option<Command> {
    let KeyInput { key, modifiers } = input;

    match key {
        Key::Char('m' | 'M') if modifiers.ctrl => Some(Command::OpenMenu),
        Key::Char('c' | 'C' | 'q' | 'Q') if modifiers.ctrl => Some(Command::Exit),
        Key::F(10) => Some(Command::OpenMenu),
        Key::Enter | Key::Char('=') => Some(Command::Evaluate),
        Key::Backspace if modifiers.shift => Some(Command::Clear),
        Key::Backspace => Some(Command::Backspace),
        Key::Delete => Some(Command::Clear),
        Key::Char(c @ '0'..='9') => Some(Command::Digit(c as u8 - b'0')),
        Key::Char('.') => Some(Command::Point),
        Key::Char(c) => Operator::from_char(c).map(Command::Operator),
        _ => None,
    }
}
