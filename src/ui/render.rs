//! Drawing the display, keypad and context menu.
//!
//! Layout, in terminal cells:
//!
//! ```text
//!  ┌─────────────────────────────┐   ┌─ Menu ───────────────┐
//!  │                       3 + 4 │   │ Plus            (p)  │
//!  └─────────────────────────────┘   │ ...                  │
//!  [  7  ] [  8  ] [  9  ] [  /  ]   └──────────────────────┘
//! ```

use crate::input::Button;
use crate::input::keypad::{self, CELL_GAP, CELL_WIDTH, COLUMNS, LAYOUT, ROW_STRIDE, ROWS};
use crate::menu::{self, ContextMenu, MenuItem};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

const LEFT: u16 = 2;
const DISPLAY_TOP: u16 = 1;
const KEYPAD_TOP: u16 = DISPLAY_TOP + 4;
const PANEL_WIDTH: u16 = COLUMNS as u16 * (CELL_WIDTH + CELL_GAP) - CELL_GAP;
const HINT_TOP: u16 = KEYPAD_TOP + ROWS as u16 * ROW_STRIDE;
const MENU_LEFT: u16 = LEFT + PANEL_WIDTH + 3;
const MENU_TOP: u16 = DISPLAY_TOP;
const MENU_WIDTH: u16 = 24;

const HINT: &str = "Ctrl+M / F10 menu   Ctrl+Q quit";

/// Redraw the whole screen.
pub fn draw(out: &mut impl Write, display: &str, menu: Option<&ContextMenu>) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    draw_display(out, display)?;
    draw_keypad(out)?;
    queue!(out, MoveTo(LEFT, HINT_TOP), Print(HINT))?;
    if let Some(menu) = menu {
        draw_menu(out, menu)?;
    }
    out.flush()
}

fn draw_display(out: &mut impl Write, display: &str) -> io::Result<()> {
    let inner = PANEL_WIDTH - 2;
    let rule = "─".repeat(inner as usize);
    queue!(
        out,
        MoveTo(LEFT, DISPLAY_TOP),
        Print(format!("┌{rule}┐")),
        MoveTo(LEFT, DISPLAY_TOP + 1),
        Print("│"),
        SetAttribute(Attribute::Bold),
        Print(fit_display(display, inner as usize - 2)),
        SetAttribute(Attribute::Reset),
        Print("│"),
        MoveTo(LEFT, DISPLAY_TOP + 2),
        Print(format!("└{rule}┘")),
    )
}

fn draw_keypad(out: &mut impl Write) -> io::Result<()> {
    for (row, buttons) in LAYOUT.iter().enumerate() {
        for (column, button) in buttons.iter().enumerate() {
            let Some(button) = button else { continue };
            let (x, y) = keypad::cell_offset(row, column);
            queue!(
                out,
                MoveTo(LEFT + x, KEYPAD_TOP + y),
                Print(button_face(*button))
            )?;
        }
    }
    Ok(())
}

fn draw_menu(out: &mut impl Write, menu: &ContextMenu) -> io::Result<()> {
    let inner = MENU_WIDTH as usize - 2;
    let title = " Menu ";
    let top = format!("┌─{title}{}┐", "─".repeat(inner - 1 - title.chars().count()));
    queue!(out, MoveTo(MENU_LEFT, MENU_TOP), Print(top))?;

    for (index, item) in menu.items().iter().enumerate() {
        let selected = index == menu.selected_index();
        queue!(out, MoveTo(MENU_LEFT, MENU_TOP + 1 + index as u16), Print("│"))?;
        if selected {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        queue!(out, Print(menu_row(item, inner)))?;
        if selected {
            queue!(out, SetAttribute(Attribute::Reset))?;
        }
        queue!(out, Print("│"))?;
    }

    let bottom_y = MENU_TOP + 1 + menu.items().len() as u16;
    queue!(
        out,
        MoveTo(MENU_LEFT, bottom_y),
        Print(format!("└{}┘", "─".repeat(inner)))
    )
}

/// Right-align `text` in `width` columns, keeping the tail when it is too long.
fn fit_display(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let start = chars.len().saturating_sub(width);
    let visible: String = chars[start..].iter().collect();
    format!(" {visible:>width$} ")
}

fn button_face(button: Button) -> String {
    let width = CELL_WIDTH as usize - 2;
    format!("[{:^width$}]", button.label())
}

fn menu_row(item: &MenuItem, width: usize) -> String {
    let shortcut = format!("({})", item.shortcut);
    let title_width = width - 1 - shortcut.len() - 1;
    format!(" {:<title_width$}{shortcut} ", item.title)
}

/// The keypad button at an absolute terminal position.
pub fn keypad_button_at(x: u16, y: u16) -> Option<Button> {
    let x = x.checked_sub(LEFT)?;
    let y = y.checked_sub(KEYPAD_TOP)?;
    keypad::button_at(x, y)
}

/// The menu item at an absolute terminal position.
pub fn menu_item_at(x: u16, y: u16) -> Option<&'static MenuItem> {
    if x <= MENU_LEFT || x >= MENU_LEFT + MENU_WIDTH - 1 {
        return None;
    }
    let row = y.checked_sub(MENU_TOP + 1)?;
    let id = u8::try_from(row).ok()?.checked_add(1)?;
    menu::item_by_id(id)
}
