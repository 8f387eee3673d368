//! The context menu: six fixed actions with single-letter shortcuts.

use crate::calculator::Operator;
use crate::input::{Command, Key, KeyInput};

/// A context menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub id: u8,
    pub title: &'static str,
    pub shortcut: char,
    pub command: Command,
}

pub static ITEMS: [MenuItem; 6] = [
    MenuItem {
        id: 1,
        title: "Plus",
        shortcut: 'p',
        command: Command::Operator(Operator::Plus),
    },
    MenuItem {
        id: 2,
        title: "Minus",
        shortcut: 'm',
        command: Command::Operator(Operator::Minus),
    },
    MenuItem {
        id: 3,
        title: "Multiply",
        shortcut: 'l',
        command: Command::Operator(Operator::Multiply),
    },
    MenuItem {
        id: 4,
        title: "Divide by",
        shortcut: 'd',
        command: Command::Operator(Operator::Divide),
    },
    MenuItem {
        id: 5,
        title: "Clear display",
        shortcut: 'c',
        command: Command::Clear,
    },
    MenuItem {
        id: 6,
        title: "Exit",
        shortcut: 'x',
        command: Command::Exit,
    },
];

/// What the front end should do after a key press while the menu is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Keep the menu open.
    Stay,
    /// Close without running anything.
    Close,
    /// Close and run the command.
    Run(Command),
}

/// Look up an item by its id.
pub fn item_by_id(id: u8) -> Option<&'static MenuItem> {
    ITEMS.iter().find(|item| item.id == id)
}

/// Look up an item by its shortcut letter, ignoring case.
pub fn item_by_shortcut(c: char) -> Option<&'static MenuItem> {
    let c = c.to_ascii_lowercase();
    ITEMS.iter().find(|item| item.shortcut == c)
}

/// Selection state of an open context menu.
#[derive(Debug, Default)]
pub struct ContextMenu {
    selected_index: usize,
}

impl ContextMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &'static [MenuItem] {
        &ITEMS
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_item(&self) -> &'static MenuItem {
        &ITEMS[self.selected_index]
    }

    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % ITEMS.len();
    }

    pub fn select_previous(&mut self) {
        self.selected_index = (self.selected_index + ITEMS.len() - 1) % ITEMS.len();
    }

    /// Handle a key press while the menu is open.
    pub fn handle_key(&mut self, input: KeyInput) -> MenuOutcome {
        match input.key {
            Key::Escape => MenuOutcome::Close,
            Key::Up => {
                self.select_previous();
                MenuOutcome::Stay
            }
            Key::Down => {
                self.select_next();
                MenuOutcome::Stay
            }
            Key::Enter => MenuOutcome::Run(self.selected_item().command),
            Key::Char(c) if !input.modifiers.ctrl => match item_by_shortcut(c) {
                Some(item) => MenuOutcome::Run(item.command),
                None => MenuOutcome::Stay,
            },
            _ => MenuOutcome::Stay,
        }
    }
}
