//! The on-screen keypad: button layout and hit-testing.

use super::Command;
use crate::calculator::Operator;

/// Width of one button in terminal columns, including its brackets.
pub const CELL_WIDTH: u16 = 7;
/// Blank columns between buttons.
pub const CELL_GAP: u16 = 1;
/// Terminal rows from one button row to the next.
pub const ROW_STRIDE: u16 = 2;

pub const COLUMNS: usize = 4;
pub const ROWS: usize = 5;

/// A keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Digit(u8),
    Point,
    Operator(Operator),
    Equals,
    Clear,
    Delete,
}

/// Button grid, top row first.
pub const LAYOUT: [[Option<Button>; COLUMNS]; ROWS] = [
    [
        Some(Button::Digit(7)),
        Some(Button::Digit(8)),
        Some(Button::Digit(9)),
        Some(Button::Operator(Operator::Divide)),
    ],
    [
        Some(Button::Digit(4)),
        Some(Button::Digit(5)),
        Some(Button::Digit(6)),
        Some(Button::Operator(Operator::Multiply)),
    ],
    [
        Some(Button::Digit(1)),
        Some(Button::Digit(2)),
        Some(Button::Digit(3)),
        Some(Button::Operator(Operator::Minus)),
    ],
    [
        Some(Button::Point),
        Some(Button::Digit(0)),
        Some(Button::Equals),
        Some(Button::Operator(Operator::Plus)),
    ],
    [Some(Button::Clear), Some(Button::Delete), None, None],
];

impl Button {
    pub fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Point => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Delete => "DEL".to_string(),
        }
    }

    /// The command a tap on this button runs.
    pub fn command(self) -> Command {
        match self {
            Self::Digit(d) => Command::Digit(d),
            Self::Point => Command::Point,
            Self::Operator(op) => Command::Operator(op),
            Self::Equals => Command::Evaluate,
            Self::Clear => Command::Clear,
            Self::Delete => Command::Backspace,
        }
    }
}

/// Top-left offset of a grid cell relative to the keypad origin.
pub fn cell_offset(row: usize, column: usize) -> (u16, u16) {
    (
        column as u16 * (CELL_WIDTH + CELL_GAP),
        row as u16 * ROW_STRIDE,
    )
}

/// Find the button under a point given relative to the keypad origin.
pub fn button_at(x: u16, y: u16) -> Option<Button> {
    if y % ROW_STRIDE != 0 || x % (CELL_WIDTH + CELL_GAP) >= CELL_WIDTH {
        return None;
    }

    let row = (y / ROW_STRIDE) as usize;
    let column = (x / (CELL_WIDTH + CELL_GAP)) as usize;
    LAYOUT.get(row)?.get(column).copied().flatten()
}
